//! Character-level Unicode helpers for the modern Hangul syllable block.

/// First precomposed syllable '가' (U+AC00). Syllable index 0.
pub const FIRST_SYLLABLE: char = '\u{AC00}';

/// Number of syllables in the modern block (19 × 21 × 28).
pub const SYLLABLE_COUNT: u32 = 11172;

/// First compatibility jamo 'ㄱ' (U+3131).
pub const COMPAT_JAMO_FIRST: char = '\u{3131}';

/// Last compatibility jamo vowel 'ㅣ' (U+3163).
pub const COMPAT_JAMO_LAST: char = '\u{3163}';

/// Zero-based index of `c` within the syllable block.
///
/// No validation: characters outside the block produce a meaningless
/// (wrapped) value. Use [`is_hangul_syllable`] first when the input is not
/// known to be a syllable.
pub fn index_of(c: char) -> u32 {
    (c as u32).wrapping_sub(FIRST_SYLLABLE as u32)
}

/// Syllable at `index`, the inverse of [`index_of`].
///
/// Indices past the block give whatever code point follows it; an index that
/// lands on a surrogate or beyond U+10FFFF yields U+FFFD.
pub fn char_at(index: u32) -> char {
    char::from_u32((FIRST_SYLLABLE as u32).wrapping_add(index))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Check the modern syllable block (U+AC00..=U+D7A3).
pub fn is_hangul_syllable(c: char) -> bool {
    index_of(c) < SYLLABLE_COUNT
}

/// Check the consonant and vowel range of the compatibility jamo block
/// ('ㄱ'..='ㅣ'). Archaic letters after U+3163 are not included.
pub fn is_compat_jamo(c: char) -> bool {
    (COMPAT_JAMO_FIRST..=COMPAT_JAMO_LAST).contains(&c)
}

/// True if every character of `s` is a bare jamo like ㄱ or ㅑ.
///
/// The empty string is vacuously made of jamo.
pub fn is_hangul_jamos(s: &str) -> bool {
    s.chars().all(is_compat_jamo)
}
