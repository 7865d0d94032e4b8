use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use hangul_core::settings::settings;
use hangul_core::table::Family;
use hangul_core::unicode::index_of;
use hangul_core::{
    compose_char, decompose_char, romanize_string, unromanize_string, JamoTable, JamoTriple,
    INITIAL_GLYPHS,
};

use super::input_lines;

pub fn romanize_cmd(text: Option<&str>, prefix: Option<&str>, postfix: Option<&str>) {
    let delimiters = settings().delimiters;
    let default_prefix = delimiters.prefix.to_string();
    let default_postfix = delimiters.postfix.to_string();
    let prefix = prefix.unwrap_or(&default_prefix);
    let postfix = postfix.unwrap_or(&default_postfix);
    for line in input_lines(text) {
        println!(
            "{}",
            romanize_string(&line, JamoTable::global(), prefix, postfix)
        );
    }
}

pub fn unromanize_cmd(text: Option<&str>, prefix: Option<char>, postfix: Option<char>) {
    let delimiters = settings().delimiters;
    let prefix = prefix.unwrap_or(delimiters.prefix);
    let postfix = postfix.unwrap_or(delimiters.postfix);
    for line in input_lines(text) {
        println!(
            "{}",
            unromanize_string(&line, JamoTable::global(), prefix, postfix)
        );
    }
}

/// One character of `decompose` output. Fields other than `character` are
/// absent for non-syllables.
#[derive(Debug, Serialize)]
pub struct DecomposeRow {
    pub character: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jamo: Option<JamoTriple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romanized: Option<[String; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<char>,
}

pub fn decompose_rows(text: &str, table: &JamoTable) -> Vec<DecomposeRow> {
    text.chars()
        .map(|c| match decompose_char(c, table) {
            Ok(triple) => {
                let labels = Family::ALL.map(|family| {
                    let index = match family {
                        Family::Initial => triple.initial,
                        Family::Medial => triple.medial,
                        Family::Final => triple.final_,
                    };
                    table.label(family, index).unwrap_or_default().to_string()
                });
                DecomposeRow {
                    character: c,
                    index: Some(index_of(c)),
                    jamo: Some(triple),
                    romanized: Some(labels),
                    initial: INITIAL_GLYPHS.get(triple.initial as usize).copied(),
                }
            }
            Err(_) => DecomposeRow {
                character: c,
                index: None,
                jamo: None,
                romanized: None,
                initial: None,
            },
        })
        .collect()
}

/// Pad `s` with spaces to `width` display columns. Hangul and jamo are
/// double-width in a terminal.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Render rows as an aligned text table with a header line.
pub fn format_rows(rows: &[DecomposeRow]) -> Vec<String> {
    let header = ["char", "index", "jamo", "romanized", "initial"];
    let mut cells: Vec<[String; 5]> = vec![header.map(String::from)];
    for row in rows {
        let dash = || "-".to_string();
        cells.push([
            row.character.to_string(),
            row.index.map_or_else(dash, |i| i.to_string()),
            row.jamo.map_or_else(dash, |t| {
                format!("({}, {}, {})", t.initial, t.medial, t.final_)
            }),
            row.romanized
                .as_ref()
                .map_or_else(dash, |labels| labels.join("·")),
            row.initial.map_or_else(dash, |c| c.to_string()),
        ]);
    }

    let mut widths = [0usize; 5];
    for line in &cells {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    cells
        .iter()
        .map(|line| {
            let padded: Vec<String> = line
                .iter()
                .zip(widths)
                .map(|(cell, w)| pad(cell, w))
                .collect();
            padded.join("  ").trim_end().to_string()
        })
        .collect()
}

pub fn decompose_cmd(text: Option<&str>, json: bool) {
    let rows: Vec<DecomposeRow> = input_lines(text)
        .iter()
        .flat_map(|line| decompose_rows(line, JamoTable::global()))
        .collect();
    if json {
        let out = die!(serde_json::to_string_pretty(&rows), "JSON error: {}");
        println!("{out}");
    } else {
        for line in format_rows(&rows) {
            println!("{line}");
        }
    }
}

pub fn compose_cmd(initial: u32, medial: u32, final_: u32) {
    let table = JamoTable::global();
    for (family, index) in Family::ALL.into_iter().zip([initial, medial, final_]) {
        let len = table.labels(family).len();
        if index as usize >= len {
            eprintln!("Error: {family} index {index} out of range (0..{len})");
            process::exit(1);
        }
    }
    println!(
        "{}",
        compose_char(JamoTriple::new(initial, medial, final_), table)
    );
}
