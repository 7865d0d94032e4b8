//! Linguistic queries used to pick Korean particles and index entries.
//!
//! Results that have no answer for non-Hangul or empty input are `Option`s:
//! `None` means "undefined" and is distinct from `Some(false)`.

use crate::romanize::decompose_char;
use crate::table::JamoTable;

/// Bare initial-consonant jamo, aligned with initial indices.
pub const INITIAL_GLYPHS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// Whether the last syllable of `text` ends in a final consonant (받침).
///
/// `None` when `text` is empty or its last character is not a syllable.
pub fn has_final_consonant(text: &str) -> Option<bool> {
    has_final_consonant_with(text, JamoTable::global())
}

pub fn has_final_consonant_with(text: &str, table: &JamoTable) -> Option<bool> {
    let last = text.chars().next_back()?;
    decompose_char(last, table)
        .ok()
        .map(|triple| triple.final_ != 0)
}

/// Append the particle form that agrees with the last syllable of `word`.
///
/// `no_consonant` is the form used after an open syllable (를, 는, 가, 로, 다),
/// `consonant` the one used after a final consonant (을, 은, 이, 으로, 이다).
/// Non-Hangul and empty words take the `no_consonant` form.
pub fn select_postfix(word: &str, no_consonant: &str, consonant: &str) -> String {
    select_postfix_with(word, no_consonant, consonant, JamoTable::global())
}

pub fn select_postfix_with(
    word: &str,
    no_consonant: &str,
    consonant: &str,
    table: &JamoTable,
) -> String {
    let postfix = match has_final_consonant_with(word, table) {
        Some(true) => consonant,
        Some(false) | None => no_consonant,
    };
    format!("{word}{postfix}")
}

/// Index heading for `text`: the initial jamo of a leading syllable
/// ("이순신" → "ㅇ"), otherwise the uppercased first character.
///
/// Uppercasing uses the full Unicode mapping, so a few characters expand
/// ('ß' → "SS"). Characters without case are returned unchanged.
pub fn initial_character_of(text: &str) -> Option<String> {
    initial_character_of_with(text, JamoTable::global(), &INITIAL_GLYPHS)
}

pub fn initial_character_of_with(
    text: &str,
    table: &JamoTable,
    glyphs: &[char],
) -> Option<String> {
    let first = text.chars().next()?;
    let glyph = decompose_char(first, table)
        .ok()
        .and_then(|triple| glyphs.get(triple.initial as usize).copied());
    Some(match glyph {
        Some(glyph) => glyph.to_string(),
        None => first.to_uppercase().collect(),
    })
}
