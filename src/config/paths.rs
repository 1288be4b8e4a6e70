//! Path management for the housing allowance tracker
//!
//! ## Path Resolution Order
//!
//! 1. `HOUSING_ALLOWANCE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/housing-allowance` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::HousingError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "HOUSING_ALLOWANCE_DATA_DIR";

/// File name of the persisted state document
pub const STATE_FILE_NAME: &str = "housing_allowance_data.json";

/// Manages all paths used by the tracker
#[derive(Debug, Clone)]
pub struct HousingPaths {
    base_dir: PathBuf,
}

impl HousingPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, HousingError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding attachment blobs
    pub fn attachments_dir(&self) -> PathBuf {
        self.data_dir().join("attachments")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted state document
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join(STATE_FILE_NAME)
    }

    /// Ensure the base, data, and attachment directories exist
    pub fn ensure_directories(&self) -> Result<(), HousingError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HousingError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| HousingError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.attachments_dir()).map_err(|e| {
            HousingError::Io(format!("Failed to create attachments directory: {}", e))
        })?;

        Ok(())
    }

    /// Check whether a state document has been written
    pub fn is_initialized(&self) -> bool {
        self.state_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, HousingError> {
    ProjectDirs::from("", "", "housing-allowance")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            HousingError::Config(format!(
                "Could not determine a home directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
