//! User settings for Pocket Ledger
//!
//! Manages display preferences (currency, grouping, date format), the
//! category list offered by the entry form, and notification timing.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::DigitGrouping;
use crate::storage::write_json_atomic;

/// User settings for Pocket Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How thousands are grouped when amounts are displayed
    #[serde(default)]
    pub digit_grouping: DigitGrouping,

    /// Date format stamped on new transactions (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Categories offered by the entry form
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Seconds before a notification clears itself
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Salary",
        "Freelance",
        "Food",
        "Rent",
        "Transport",
        "Shopping",
        "Bills",
        "Health",
        "Entertainment",
        "Other",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_notification_secs() -> u64 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            digit_grouping: DigitGrouping::default(),
            date_format: default_date_format(),
            categories: default_categories(),
            notification_secs: default_notification_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    ///
    /// A settings file that exists but does not parse is an error; it is
    /// never overwritten.
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk atomically
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
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
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.digit_grouping, DigitGrouping::Indian);
        assert_eq!(settings.notification_secs, 2);
        assert!(settings.categories.iter().any(|c| c == "Salary"));
        assert!(settings.categories.iter().any(|c| c == "Food"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.digit_grouping = DigitGrouping::Western;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.digit_grouping, DigitGrouping::Western);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(!paths.settings_file().exists());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "₹");
        assert!(paths.settings_file().exists());

        let on_disk: Settings =
            serde_json::from_str(&std::fs::read_to_string(paths.settings_file()).unwrap()).unwrap();
        assert_eq!(on_disk.categories, settings.categories);
    }

    #[test]
    fn test_unparseable_settings_are_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.base_dir()).unwrap();
        std::fs::write(paths.settings_file(), "{ broken").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(LedgerError::Config(_))
        ));
        assert_eq!(std::fs::read_to_string(paths.settings_file()).unwrap(), "{ broken");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(settings.categories.len(), 10);
    }
}
