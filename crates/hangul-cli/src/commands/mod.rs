//! Subcommand implementations for `hangultool`.
//!
//! Each function prints its result to stdout. Fatal errors are reported on
//! stderr and end the process with status 1.

use std::io::{self, BufRead};
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod query_ops;

/// The text argument as a single line, or every line of stdin when absent.
pub(crate) fn input_lines(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) => vec![text.to_string()],
        None => io::stdin()
            .lock()
            .lines()
            .map(|l| die!(l, "Failed to read stdin: {}"))
            .collect(),
    }
}
