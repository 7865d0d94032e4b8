//! Single-syllable decomposition, composition and romanization.

use crate::error::HangulError;
use crate::jamo::{compose_index, decompose_index, JamoTriple};
use crate::table::{Family, JamoTable};
use crate::unicode::{char_at, index_of};

/// Decompose a syllable into jamo indices.
///
/// The accepted range is the first `initials × medials × finals` code points
/// from '가', so the check follows the table's shape.
pub fn decompose_char(c: char, table: &JamoTable) -> Result<JamoTriple, HangulError> {
    let radices = table.radices();
    let index = index_of(c);
    if index < radices.product() {
        Ok(decompose_index(index, radices))
    } else {
        Err(HangulError::NotHangul(c))
    }
}

/// Compose jamo indices into a syllable. Out-of-range components are not
/// checked and give a different character.
pub fn compose_char(triple: JamoTriple, table: &JamoTable) -> char {
    char_at(compose_index(triple, table.radices()))
}

/// Spell a syllable as initial + medial + final labels, e.g. '많' → "manh".
pub fn romanize_char(c: char, table: &JamoTable) -> Result<String, HangulError> {
    let triple = decompose_char(c, table)?;
    Ok(Family::ALL
        .iter()
        .zip(triple.to_array())
        .filter_map(|(&family, index)| table.label(family, index))
        .collect())
}

/// Parse one romanized syllable.
///
/// Each family consumes the longest label that prefixes the remaining text.
/// Text left over after the final family is a mismatch, so "hihh" does not
/// parse even though "hih" does.
pub fn unromanize_char(romanized: &str, table: &JamoTable) -> Result<char, HangulError> {
    let mut rest = romanized;
    let mut digits = [0u32; 3];
    for (digit, family) in digits.iter_mut().zip(Family::ALL) {
        let (index, len) = longest_prefix(table.labels(family), rest)
            .ok_or_else(|| HangulError::NoMatch(romanized.to_string()))?;
        *digit = index as u32;
        rest = &rest[len..];
    }
    if !rest.is_empty() {
        return Err(HangulError::NoMatch(romanized.to_string()));
    }
    Ok(compose_char(JamoTriple::from_array(digits), table))
}

/// `(index, byte length)` of the longest label prefixing `text`.
///
/// Equal lengths go to the later label: the comparison is `>=`.
fn longest_prefix(labels: &[String], text: &str) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (index, label) in labels.iter().enumerate() {
        if !text.starts_with(label.as_str()) {
            continue;
        }
        if best.map_or(true, |(_, best_len)| label.len() >= best_len) {
            best = Some((index, label.len()));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{REVISED_FINALS, REVISED_INITIALS, REVISED_MEDIALS};
    use crate::unicode::{FIRST_SYLLABLE, SYLLABLE_COUNT};

    fn owned(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_decompose_char() {
        let table = JamoTable::revised();
        let cases = [
            ('가', JamoTriple::new(0, 0, 0)),
            ('각', JamoTriple::new(0, 0, 1)),
            ('개', JamoTriple::new(0, 1, 0)),
            ('갸', JamoTriple::new(0, 2, 0)),
            ('까', JamoTriple::new(1, 0, 0)),
            ('노', JamoTriple::new(2, 8, 0)),
            ('많', JamoTriple::new(6, 0, 6)),
            ('아', JamoTriple::new(11, 0, 0)),
            ('힣', JamoTriple::new(18, 20, 27)),
        ];
        for (c, expected) in cases {
            assert_eq!(decompose_char(c, &table), Ok(expected), "{c}");
        }
    }

    #[test]
    fn test_decompose_not_hangul() {
        let table = JamoTable::revised();
        assert_eq!(decompose_char('a', &table), Err(HangulError::NotHangul('a')));
        assert_eq!(decompose_char('ㄱ', &table), Err(HangulError::NotHangul('ㄱ')));
        assert_eq!(
            decompose_char('\u{D7A4}', &table),
            Err(HangulError::NotHangul('\u{D7A4}'))
        );
    }

    #[test]
    fn test_compose_char() {
        let table = JamoTable::revised();
        assert_eq!(compose_char(JamoTriple::new(0, 0, 0), &table), '가');
        assert_eq!(compose_char(JamoTriple::new(2, 8, 0), &table), '노');
        assert_eq!(compose_char(JamoTriple::new(6, 0, 6), &table), '많');
        assert_eq!(compose_char(JamoTriple::new(18, 20, 27), &table), '힣');
    }

    #[test]
    fn test_romanize_char() {
        let table = JamoTable::revised();
        let cases = [
            ('가', "ga"),
            ('각', "gag"),
            ('개', "gae"),
            ('갸', "gya"),
            ('까', "gga"),
            ('노', "no"),
            ('많', "manh"),
            ('아', "a"),
            ('힣', "hih"),
        ];
        for (c, expected) in cases {
            assert_eq!(romanize_char(c, &table).unwrap(), expected);
        }
        assert_eq!(romanize_char('1', &table), Err(HangulError::NotHangul('1')));
    }

    #[test]
    fn test_unromanize_char() {
        let table = JamoTable::revised();
        let cases = [
            ("ga", '가'),
            ("gag", '각'),
            ("gae", '개'),
            ("gya", '갸'),
            ("gga", '까'),
            ("no", '노'),
            ("manh", '많'),
            ("a", '아'),
            ("hih", '힣'),
        ];
        for (romanized, expected) in cases {
            assert_eq!(unromanize_char(romanized, &table), Ok(expected), "{romanized}");
        }
    }

    #[test]
    fn test_unromanize_no_match() {
        let table = JamoTable::revised();
        for romanized in ["", "g", "hihh", "xa", "ga-"] {
            assert_eq!(
                unromanize_char(romanized, &table),
                Err(HangulError::NoMatch(romanized.to_string())),
                "{romanized:?}"
            );
        }
    }

    #[test]
    fn test_longest_match_prefers_longer_label() {
        let table = JamoTable::revised();
        // "g" and "gg" both prefix "gga"; the two-letter initial wins.
        assert_eq!(unromanize_char("gga", &table), Ok('까'));
        // "eo" beats "e" for the medial.
        assert_eq!(unromanize_char("geo", &table), Ok('거'));
        // "ng" beats "n" for the final.
        assert_eq!(unromanize_char("gang", &table), Ok('강'));
    }

    #[test]
    fn test_equal_length_tie_goes_to_later_label() {
        let mut initials = owned(&REVISED_INITIALS);
        // Index 3 and index 0 both spell "g" now.
        initials[3] = "g".into();
        let table =
            JamoTable::new(initials, owned(&REVISED_MEDIALS), owned(&REVISED_FINALS)).unwrap();
        let c = unromanize_char("ga", &table).unwrap();
        assert_eq!(decompose_char(c, &table).unwrap().initial, 3);
        assert_eq!(c, '다');
    }

    #[test]
    fn test_longest_prefix_helper() {
        let labels = owned(&["", "a", "ab", "b"]);
        assert_eq!(longest_prefix(&labels, "abc"), Some((2, 2)));
        assert_eq!(longest_prefix(&labels, "b"), Some((3, 1)));
        assert_eq!(longest_prefix(&labels, "c"), Some((0, 0)));
        assert_eq!(longest_prefix(&owned(&["a"]), "c"), None);
    }

    #[test]
    fn test_roundtrip_every_syllable() {
        let table = JamoTable::revised();
        for offset in 0..SYLLABLE_COUNT {
            let c = char::from_u32(FIRST_SYLLABLE as u32 + offset).unwrap();
            let romanized = romanize_char(c, &table).unwrap();
            assert_eq!(unromanize_char(&romanized, &table), Ok(c), "{romanized}");
        }
    }
}
