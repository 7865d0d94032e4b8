//! Whole-string romanization with delimiter-bracketed syllables.
//!
//! `romanize_string` wraps each romanized syllable in a prefix and postfix,
//! `unromanize_string` scans for those brackets and parses what is between.
//! Text outside brackets passes through unchanged in both directions.

use tracing::{debug, debug_span};

use crate::romanize::{romanize_char, unromanize_char};
use crate::table::JamoTable;

/// Bracket characters around a romanized syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub prefix: char,
    pub postfix: char,
}

impl Delimiters {
    pub const SQUARE: Delimiters = Delimiters {
        prefix: '[',
        postfix: ']',
    };
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Romanize every syllable of `text`, emitting `prefix + label + postfix`.
///
/// Any other character is copied as is, and so is a syllable whose labels are
/// all empty under a custom table. Empty delimiters are allowed, but the
/// output can then no longer be unromanized.
pub fn romanize_string(text: &str, table: &JamoTable, prefix: &str, postfix: &str) -> String {
    let _span = debug_span!("romanize_string", len = text.len()).entered();

    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match romanize_char(c, table) {
            Ok(romanized) if !romanized.is_empty() => {
                out.push_str(prefix);
                out.push_str(&romanized);
                out.push_str(postfix);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replace each `prefix token postfix` span with the syllable `token` spells.
///
/// Single left-to-right pass. `commit` is the end of what has been copied to
/// the output so far; `open` is the position of the last unclosed prefix.
///
/// - A prefix flushes pending literal text and opens a span.
/// - A postfix closes the open span. If the token parses, the syllable is
///   emitted and the span consumed. Otherwise the text up to the postfix is
///   emitted and `commit` stops on the postfix itself, so the postfix is
///   copied with the literal text that follows.
/// - A postfix with no open span is ordinary text.
/// - Whatever is left, including an unclosed span, is copied at the end.
pub fn unromanize_string(text: &str, table: &JamoTable, prefix: char, postfix: char) -> String {
    let _span = debug_span!("unromanize_string", len = text.len()).entered();

    let mut out = String::with_capacity(text.len());
    let mut open: Option<usize> = None;
    let mut commit = 0;

    for (pos, c) in text.char_indices() {
        if c == prefix {
            out.push_str(&text[commit..pos]);
            commit = pos;
            open = Some(pos);
        } else if c == postfix {
            let Some(start) = open.take() else {
                continue;
            };
            let token = &text[start + prefix.len_utf8()..pos];
            match unromanize_char(token, table) {
                Ok(syllable) => {
                    out.push(syllable);
                    commit = pos + postfix.len_utf8();
                }
                Err(e) => {
                    debug!(token, "bracketed span kept as text: {e}");
                    out.push_str(&text[commit..pos]);
                    commit = pos;
                }
            }
        }
    }
    out.push_str(&text[commit..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romanize(text: &str) -> String {
        romanize_string(text, &JamoTable::revised(), "[", "]")
    }

    fn unromanize(text: &str) -> String {
        unromanize_string(text, &JamoTable::revised(), '[', ']')
    }

    #[test]
    fn test_romanize_string() {
        assert_eq!(romanize("가나다"), "[ga][na][da]");
        assert_eq!(romanize("없는"), "[eobs][neun]");
        assert_eq!(romanize(""), "");
    }

    #[test]
    fn test_romanize_string_custom_delimiters() {
        let table = JamoTable::revised();
        assert_eq!(romanize_string("산도", &table, "(", ")"), "(san)(do)");
        assert_eq!(romanize_string("산도", &table, "", ""), "sando");
        assert_eq!(romanize_string("산도", &table, "<<", ">>"), "<<san>><<do>>");
    }

    #[test]
    fn test_romanize_string_passthrough() {
        assert_eq!(romanize("I ♥ 서울!"), "I ♥ [seo][ul]!");
        assert_eq!(romanize("ㅋㅋ"), "ㅋㅋ");
    }

    #[test]
    fn test_romanize_string_empty_label_keeps_syllable() {
        use crate::table::{REVISED_FINALS, REVISED_INITIALS, REVISED_MEDIALS};

        let owned = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect();
        let mut medials: Vec<String> = owned(&REVISED_MEDIALS);
        medials[0] = String::new();
        let table =
            JamoTable::new(owned(&REVISED_INITIALS), medials, owned(&REVISED_FINALS)).unwrap();
        assert_eq!(romanize_string("아가", &table, "[", "]"), "아[g]");
    }

    #[test]
    fn test_unromanize_string() {
        assert_eq!(unromanize("[ga][na][da]"), "가나다");
        assert_eq!(unromanize("[eobs][neun]"), "없는");
        assert_eq!(unromanize("I ♥ [seo][ul]!"), "I ♥ 서울!");
        assert_eq!(unromanize(""), "");
    }

    #[test]
    fn test_unromanize_string_custom_delimiters() {
        let table = JamoTable::revised();
        assert_eq!(unromanize_string("(san)(do)", &table, '(', ')'), "산도");
        assert_eq!(unromanize_string("«san»«do»", &table, '«', '»'), "산도");
    }

    #[test]
    fn test_unromanize_failed_span_keeps_text() {
        assert_eq!(unromanize("[xx]"), "[xx]");
        assert_eq!(unromanize("[x][ga]"), "[x]가");
        assert_eq!(unromanize("[hihh] [hih]"), "[hihh] 힣");
        assert_eq!(unromanize("[]"), "[]");
    }

    #[test]
    fn test_unromanize_unclosed_prefix() {
        assert_eq!(unromanize("a[ga"), "a[ga");
        assert_eq!(unromanize("[ga][na"), "가[na");
    }

    #[test]
    fn test_unromanize_nested_prefix_reopens() {
        assert_eq!(unromanize("[[ga]"), "[가");
    }

    #[test]
    fn test_unromanize_stray_postfix_is_text() {
        assert_eq!(unromanize("ga]"), "ga]");
        assert_eq!(unromanize("[ga]]"), "가]");
    }

    #[test]
    fn test_same_prefix_and_postfix() {
        // Every '|' opens a span, so nothing ever closes.
        let table = JamoTable::revised();
        assert_eq!(unromanize_string("|ga|", &table, '|', '|'), "|ga|");
    }

    #[test]
    fn test_roundtrip_mixed() {
        let s = "오늘 날씨는 맑음, 25C (high)";
        assert_eq!(unromanize(&romanize(s)), s);
    }
}
