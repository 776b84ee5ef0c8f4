//! User settings for SpendWise
//!
//! Manages user preferences including the default budget period, display
//! formats, notification timing and the storage backend.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Period;

/// What to do when a new expense would exceed the remaining budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverspendPolicy {
    /// Reject the expense (default)
    #[default]
    Block,
    /// Record the expense and show a warning
    Warn,
}

/// Where tracker state is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file under the data directory (default)
    #[default]
    File,
    /// Process memory only; nothing survives a restart
    Memory,
}

/// User settings for SpendWise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period preselected when no budget has been set yet
    #[serde(default)]
    pub default_period: Period,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for expense dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How long transient notifications stay visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    #[serde(default)]
    pub overspend_policy: OverspendPolicy,

    #[serde(default)]
    pub storage_backend: StorageBackend,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_notification_secs() -> u64 {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_period: Period::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            notification_secs: default_notification_secs(),
            overspend_policy: OverspendPolicy::default(),
            storage_backend: StorageBackend::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
