//! User settings for the client ledger
//!
//! Behavior switches that keep the legacy file-format semantics by default
//! while allowing stricter handling of duplicates, malformed lines and
//! history lookups.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// What the loader does with a line that cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Keep a zero-value record in place of the line (default)
    #[default]
    Keep,
    /// Drop the line
    Skip,
}

/// How the transaction history is matched against an account number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMatch {
    /// Any line containing the account number (default)
    #[default]
    Substring,
    /// Only lines whose account or target account field equals it
    Exact,
}

/// User settings for the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Reject adds and edits that would create a second record with the
    /// same account number
    #[serde(default)]
    pub reject_duplicate_accounts: bool,

    /// Handling of undecodable lines in the clients file
    #[serde(default)]
    pub malformed_records: MalformedPolicy,

    /// Default matching mode for transaction history
    #[serde(default)]
    pub history_match: HistoryMatch,

    /// Write a log line for withdraw/deposit attempts rejected by validation
    #[serde(default = "default_true")]
    pub log_rejected_attempts: bool,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reject_duplicate_accounts: false,
            malformed_records: MalformedPolicy::default(),
            history_match: HistoryMatch::default(),
            log_rejected_attempts: default_true(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.reject_duplicate_accounts);
        assert_eq!(settings.malformed_records, MalformedPolicy::Keep);
        assert_eq!(settings.history_match, HistoryMatch::Substring);
        assert!(settings.log_rejected_attempts);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.reject_duplicate_accounts = true;
        settings.history_match = HistoryMatch::Exact;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.reject_duplicate_accounts);
        assert_eq!(loaded.history_match, HistoryMatch::Exact);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"malformed_records": "skip"}"#).unwrap();
        assert_eq!(settings.malformed_records, MalformedPolicy::Skip);
        assert!(settings.log_rejected_attempts);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(LedgerError::Config(_))));
    }
}
