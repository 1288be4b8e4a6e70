//! User settings
//!
//! Display preferences and the dashboard usage thresholds.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::HousingPaths;
use crate::error::HousingError;

/// User settings for the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used in listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of recent expenses shown on the dashboard
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Usage percentage above which the dashboard warns
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Usage percentage above which the dashboard flags the allowance as critical
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_recent_count() -> usize {
    3
}

fn default_warning_threshold() -> f64 {
    75.0
}

fn default_critical_threshold() -> f64 {
    90.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_count: default_recent_count(),
            warning_threshold: default_warning_threshold(),
            critical_threshold: default_critical_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &HousingPaths) -> Result<Self, HousingError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| HousingError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| HousingError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HousingPaths) -> Result<(), HousingError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| HousingError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| HousingError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format a date with the configured `date_format`
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Check the date format and that the thresholds are ordered and within 0-100
    pub fn validate(&self) -> Result<(), HousingError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(HousingError::Config(format!(
                "Invalid date_format: {}",
                self.date_format
            )));
        }

        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.warning_threshold) || !in_range(self.critical_threshold) {
            return Err(HousingError::Config(
                "Usage thresholds must be between 0 and 100".into(),
            ));
        }
        if self.warning_threshold > self.critical_threshold {
            return Err(HousingError::Config(
                "warning_threshold cannot exceed critical_threshold".into(),
            ));
        }
        Ok(())
    }
}
