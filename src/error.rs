//! Custom error types for the housing allowance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tracker operations
#[derive(Error, Debug)]
pub enum HousingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Attachment blob errors
    #[error("Attachment error: {0}")]
    Attachment(String),

    /// Export/import errors
    #[error("Export error: {0}")]
    Export(String),
}

impl HousingError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for attachments
    pub fn attachment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Attachment",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for HousingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HousingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type HousingResult<T> = Result<T, HousingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HousingError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = HousingError::category_not_found("Lawn Care");
        assert_eq!(err.to_string(), "Category not found: Lawn Care");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error() {
        let err = HousingError::Validation("Amount cannot be negative".into());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Amount cannot be negative");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let housing_err: HousingError = io_err.into();
        assert!(matches!(housing_err, HousingError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let housing_err: HousingError = json_err.into();
        assert!(matches!(housing_err, HousingError::Json(_)));
    }
}
