use std::fs;
use std::path::Path;
use std::process;

use tracing::debug;

use hangul_core::settings;
use hangul_core::table::{self, Family, JamoTable};

pub fn table_export() {
    print!("{}", table::default_toml());
}

/// Number of labels in `t` that differ from the built-in table.
pub fn changed_labels(t: &JamoTable) -> usize {
    let builtin = JamoTable::revised();
    Family::ALL
        .iter()
        .map(|&family| {
            t.labels(family)
                .iter()
                .zip(builtin.labels(family))
                .filter(|(a, b)| a != b)
                .count()
        })
        .sum()
}

pub fn table_validate(file: &str) {
    let t = die!(table::read_table_file(Path::new(file)), "Error: {}");
    let changed = changed_labels(&t);
    println!("OK: 19/21/28 labels, {changed} differ from the built-in table");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: delimiters.prefix={:?}, delimiters.postfix={:?}",
        s.delimiters.prefix, s.delimiters.postfix
    );
}

/// Install custom table and settings files as the process-wide defaults.
/// Must run before any conversion touches the globals.
pub fn install_custom(table_file: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = table_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(JamoTable::init_custom(content), "Error in table {file}: {}");
        debug!(file, "custom jamo table installed");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            settings::init_custom(content),
            "Error in settings {file}: {}"
        );
        debug!(file, "custom settings installed");
    }
}
