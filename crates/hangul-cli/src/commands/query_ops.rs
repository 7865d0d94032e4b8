use hangul_core::unicode::is_hangul_jamos;
use hangul_core::{has_final_consonant, initial_character_of, select_postfix};

use super::input_lines;

/// Text form of a tri-state answer; "undefined" is kept apart from "false".
pub fn describe(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "true",
        Some(false) => "false",
        None => "undefined",
    }
}

pub fn has_final_cmd(text: Option<&str>) {
    for line in input_lines(text) {
        println!("{}\t{}", describe(has_final_consonant(&line)), line);
    }
}

pub fn postfix_cmd(word: Option<&str>, no_consonant: &str, consonant: &str) {
    for line in input_lines(word) {
        println!("{}", select_postfix(&line, no_consonant, consonant));
    }
}

pub fn initial_cmd(text: Option<&str>) {
    for line in input_lines(text) {
        match initial_character_of(&line) {
            Some(initial) => println!("{initial}\t{line}"),
            None => println!("-\t{line}"),
        }
    }
}

pub fn is_jamos_cmd(text: Option<&str>) {
    for line in input_lines(text) {
        println!("{}\t{}", is_hangul_jamos(&line), line);
    }
}
