//! Configuration module
//!
//! This module provides configuration management including:
//! - Path resolution for settings, state, and attachment blobs
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HousingPaths;
pub use settings::Settings;
