//! User settings for Pocketbook
//!
//! Manages display preferences, seeding and logging options.

use std::path::PathBuf;

use chrono::format::{Item as FormatItem, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Pocketbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Seed file loaded at startup (overrides `seed.json` in the data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Fall back to the built-in demo data when no seed file exists
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    /// Whether item mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Default tracing filter when `POCKETBOOK_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            seed_file: None,
            seed_demo_data: true,
            audit_enabled: true,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Nothing is written; the caller decides when to persist.
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        read_json(paths.settings_file()).map_err(|e| PocketbookError::Config(e.to_string()))
    }

    /// Configured date format, or ISO dates if it does not parse
    pub fn display_date_format(&self) -> &str {
        if StrftimeItems::new(&self.date_format).any(|i| matches!(i, FormatItem::Error)) {
            "%Y-%m-%d"
        } else {
            &self.date_format
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.seed_demo_data);
        assert!(settings.audit_enabled);
        assert!(settings.seed_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.seed_demo_data = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.seed_demo_data);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.log_level, "info");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_load_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        Settings::load_or_create(&paths).unwrap();
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let mut settings = Settings::default();
        settings.date_format = "%d/%m/%Y".to_string();
        assert_eq!(settings.display_date_format(), "%d/%m/%Y");

        settings.date_format = "%Q".to_string();
        assert_eq!(settings.display_date_format(), "%Y-%m-%d");
    }
}
