/// Failure of a character-level conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HangulError {
    /// The character lies outside the syllable block the table describes.
    #[error("not a hangul syllable: {0:?}")]
    NotHangul(char),

    /// The romanized token cannot be parsed against the table.
    #[error("no syllable matches romanization {0:?}")]
    NoMatch(String),
}
