//! Custom error types for Finance Guardian
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Finance Guardian operations
#[derive(Error, Debug)]
pub enum GuardianError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV sheet encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Month outside of 1..=12
    #[error("Invalid month: {0} (expected 1 to 12)")]
    InvalidMonth(u32),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Workbook storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The interactive input stream ended
    #[error("Input closed before the session finished")]
    InputClosed,
}

impl GuardianError {
    /// Create a "not found" error for sheets
    pub fn sheet_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Sheet",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidMonth(_))
    }
}

impl From<std::io::Error> for GuardianError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GuardianError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for GuardianError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Finance Guardian operations
pub type GuardianResult<T> = Result<T, GuardianError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuardianError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = GuardianError::user_not_found("alice1");
        assert_eq!(err.to_string(), "User not found: alice1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_month_is_validation() {
        let err = GuardianError::InvalidMonth(13);
        assert_eq!(err.to_string(), "Invalid month: 13 (expected 1 to 12)");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guardian_err: GuardianError = io_err.into();
        assert!(matches!(guardian_err, GuardianError::Io(_)));
    }
}
