//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the jamo table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use crate::scan::Delimiters;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).unwrap_or_else(|e| {
            warn!("settings rejected, using defaults: {e}");
            Settings::default()
        })
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub delimiters: Delimiters,
}

#[derive(Deserialize)]
struct SettingsFile {
    delimiters: DelimiterSection,
}

#[derive(Deserialize)]
struct DelimiterSection {
    prefix: String,
    postfix: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let file: SettingsFile =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    let prefix = single_char("delimiters.prefix", &file.delimiters.prefix)?;
    let postfix = single_char("delimiters.postfix", &file.delimiters.postfix)?;
    if prefix == postfix {
        warn!(%prefix, "prefix and postfix are identical; bracketed spans will never close");
    }
    Ok(Settings {
        delimiters: Delimiters { prefix, postfix },
    })
}

fn single_char(field: &str, value: &str) -> Result<char, SettingsError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SettingsError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be exactly one character, got {value:?}"),
        }),
    }
}
