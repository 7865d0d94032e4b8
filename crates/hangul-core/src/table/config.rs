use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Family, JamoTable};

#[derive(Deserialize, Serialize)]
struct TableFile {
    table: TableLabels,
}

#[derive(Deserialize, Serialize)]
struct TableLabels {
    initials: Vec<String>,
    medials: Vec<String>,
    finals: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("TOML serialize error: {0}")]
    Serialize(String),
    #[error("[table] {family} has {found} labels, expected {expected}")]
    FamilyLength {
        family: Family,
        expected: usize,
        found: usize,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("jamo table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text with a `[table]` section into a [`JamoTable`].
pub fn parse_table_toml(toml_str: &str) -> Result<JamoTable, TableConfigError> {
    let file: TableFile =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;
    let TableLabels {
        initials,
        medials,
        finals,
    } = file.table;
    JamoTable::new(initials, medials, finals)
}

pub fn read_table_file(path: &Path) -> Result<JamoTable, TableConfigError> {
    let content = fs::read_to_string(path).map_err(|source| TableConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table_toml(&content)
}

pub fn table_to_toml(table: &JamoTable) -> Result<String, TableConfigError> {
    let file = TableFile {
        table: TableLabels {
            initials: table.initials().to_vec(),
            medials: table.medials().to_vec(),
            finals: table.finals().to_vec(),
        },
    };
    toml::to_string_pretty(&file).map_err(|e| TableConfigError::Serialize(e.to_string()))
}
