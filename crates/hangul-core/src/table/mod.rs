//! Romanization labels for the three jamo families.
//!
//! A [`JamoTable`] holds one ordered label list per family, aligned with the
//! jamo indices of [`crate::jamo::JamoTriple`]. The built-in table is a
//! Revised-Romanization-style spelling; a replacement can be installed from
//! TOML before the first [`JamoTable::global`] call.

mod config;

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::jamo::Radices;

pub use config::{parse_table_toml, read_table_file, table_to_toml, TableConfigError};

/// Initial consonants, index 11 (ㅇ) is silent.
pub const REVISED_INITIALS: [&str; 19] = [
    "g", "gg", "n", "d", "dd", "r", "m", "b", "bb", "s", "ss", "", "j", "jj", "c", "k", "t", "p",
    "h",
];

pub const REVISED_MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "weo", "we",
    "wi", "yu", "eu", "yi", "i",
];

/// Final consonants, index 0 is "no final consonant".
pub const REVISED_FINALS: [&str; 28] = [
    "", "g", "gg", "gs", "n", "nj", "nh", "d", "l", "lg", "lm", "lb", "ls", "lt", "lp", "lh", "m",
    "b", "bs", "s", "ss", "ng", "j", "c", "k", "t", "p", "h",
];

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// One of the three positional jamo families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Initial,
    Medial,
    Final,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Initial, Family::Medial, Family::Final];

    /// Number of labels the Unicode syllable block requires for this family.
    pub const fn expected_len(self) -> usize {
        match self {
            Family::Initial => 19,
            Family::Medial => 21,
            Family::Final => 28,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Initial => "initials",
            Family::Medial => "medials",
            Family::Final => "finals",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JamoTable {
    families: [Vec<String>; 3],
}

impl JamoTable {
    /// Build a table from label lists.
    ///
    /// Each family must have the length the syllable block uses (19, 21, 28);
    /// labels themselves are free-form and may repeat.
    pub fn new(
        initials: Vec<String>,
        medials: Vec<String>,
        finals: Vec<String>,
    ) -> Result<Self, TableConfigError> {
        let families = [initials, medials, finals];
        for (family, labels) in Family::ALL.iter().zip(&families) {
            if labels.len() != family.expected_len() {
                return Err(TableConfigError::FamilyLength {
                    family: *family,
                    expected: family.expected_len(),
                    found: labels.len(),
                });
            }
        }
        Ok(Self { families })
    }

    /// The built-in Revised Romanization table.
    pub fn revised() -> Self {
        let owned = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect();
        Self {
            families: [
                owned(&REVISED_INITIALS),
                owned(&REVISED_MEDIALS),
                owned(&REVISED_FINALS),
            ],
        }
    }

    /// Set a custom TOML table before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> &'static JamoTable {
        static INSTANCE: OnceLock<JamoTable> = OnceLock::new();
        INSTANCE.get_or_init(|| match CUSTOM_TOML.get() {
            Some(toml_str) => match parse_table_toml(toml_str) {
                Ok(table) => {
                    debug!("jamo table loaded from custom TOML");
                    table
                }
                Err(e) => {
                    warn!("custom jamo table rejected, using built-in: {e}");
                    JamoTable::revised()
                }
            },
            None => JamoTable::revised(),
        })
    }

    pub fn labels(&self, family: Family) -> &[String] {
        &self.families[family as usize]
    }

    /// Label at `index` in `family`, `None` past the end of the family.
    pub fn label(&self, family: Family, index: u32) -> Option<&str> {
        self.labels(family)
            .get(index as usize)
            .map(String::as_str)
    }

    pub fn initials(&self) -> &[String] {
        self.labels(Family::Initial)
    }

    pub fn medials(&self) -> &[String] {
        self.labels(Family::Medial)
    }

    pub fn finals(&self) -> &[String] {
        self.labels(Family::Final)
    }

    /// Family sizes as mixed-radix digits.
    pub fn radices(&self) -> Radices {
        Radices(self.families.each_ref().map(|labels| labels.len() as u32))
    }
}

impl Default for JamoTable {
    fn default() -> Self {
        Self::revised()
    }
}

/// Returns the built-in table serialized as TOML.
pub fn default_toml() -> String {
    // The built-in labels always serialize.
    table_to_toml(&JamoTable::revised()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jamo::SYLLABLE_RADICES;

    fn owned(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn revised_shape() {
        let table = JamoTable::revised();
        assert_eq!(table.initials().len(), 19);
        assert_eq!(table.medials().len(), 21);
        assert_eq!(table.finals().len(), 28);
        assert_eq!(table.radices(), SYLLABLE_RADICES);
    }

    #[test]
    fn silent_entries_are_empty() {
        let table = JamoTable::revised();
        assert_eq!(table.label(Family::Initial, 11), Some(""));
        assert_eq!(table.label(Family::Final, 0), Some(""));
        assert!(table.medials().iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn label_past_end() {
        let table = JamoTable::revised();
        assert_eq!(table.label(Family::Medial, 20), Some("i"));
        assert_eq!(table.label(Family::Medial, 21), None);
    }

    #[test]
    fn new_rejects_wrong_length() {
        let err = JamoTable::new(
            owned(&REVISED_INITIALS[..18]),
            owned(&REVISED_MEDIALS),
            owned(&REVISED_FINALS),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TableConfigError::FamilyLength {
                family: Family::Initial,
                expected: 19,
                found: 18
            }
        ));
    }

    #[test]
    fn new_accepts_duplicates() {
        let mut initials = owned(&REVISED_INITIALS);
        initials[3] = "g".into();
        let table =
            JamoTable::new(initials, owned(&REVISED_MEDIALS), owned(&REVISED_FINALS)).unwrap();
        assert_eq!(table.label(Family::Initial, 3), Some("g"));
    }

    #[test]
    fn global_defaults_to_revised() {
        assert_eq!(JamoTable::global(), &JamoTable::revised());
    }

    #[test]
    fn default_toml_parses_back() {
        let table = parse_table_toml(&default_toml()).unwrap();
        assert_eq!(table, JamoTable::revised());
    }

    #[test]
    fn family_display() {
        assert_eq!(Family::Initial.to_string(), "initials");
        assert_eq!(Family::Final.to_string(), "finals");
    }
}
