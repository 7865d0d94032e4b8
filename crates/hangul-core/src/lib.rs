//! Hangul syllable decomposition, romanization and particle helpers.
//!
//! Syllables in the modern block (가..힣) are numbered 0..11172 and split
//! into (initial, medial, final) jamo indices with radices (19, 21, 28).
//! A [`table::JamoTable`] spells each index as a Latin label, which gives a
//! reversible romanization: 많 ⇄ "manh", 가나다 ⇄ "[ga][na][da]".

pub mod error;
pub mod jamo;
pub mod query;
pub mod romanize;
pub mod scan;
pub mod settings;
pub mod table;
pub mod unicode;


pub use error::HangulError;
pub use jamo::{compose_index, decompose_index, JamoTriple, Radices, SYLLABLE_RADICES};
pub use query::{has_final_consonant, initial_character_of, select_postfix, INITIAL_GLYPHS};
pub use romanize::{compose_char, decompose_char, romanize_char, unromanize_char};
pub use scan::{romanize_string, unromanize_string, Delimiters};
pub use table::JamoTable;

/// Romanize `text` with the global table and delimiters.
pub fn romanize(text: &str) -> String {
    let Delimiters { prefix, postfix } = settings::settings().delimiters;
    romanize_string(
        text,
        JamoTable::global(),
        prefix.encode_utf8(&mut [0; 4]),
        postfix.encode_utf8(&mut [0; 4]),
    )
}

/// Inverse of [`romanize`].
pub fn unromanize(text: &str) -> String {
    let Delimiters { prefix, postfix } = settings::settings().delimiters;
    unromanize_string(text, JamoTable::global(), prefix, postfix)
}
