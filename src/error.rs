//! Custom error types for Budget Shell
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Note that malformed user input is never an
//! error: the parser reports it as suggestions instead.

use thiserror::Error;

/// The main error type for Budget Shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A grammar table could not be built
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

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

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ShellError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
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

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<regex::Error> for ShellError {
    fn from(err: regex::Error) -> Self {
        Self::Grammar(err.to_string())
    }
}

/// Result type alias for Budget Shell operations
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ShellError::account_not_found("Checking");
        assert_eq!(err.to_string(), "Account not found: Checking");
        assert!(err.is_not_found());
        assert!(!err.is_validation());

        let err = ShellError::category_not_found("Bills");
        assert_eq!(err.to_string(), "Category not found: Bills");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_error() {
        let err = ShellError::Duplicate {
            entity_type: "Account",
            identifier: "Groceries".into(),
        };
        assert_eq!(err.to_string(), "Account already exists: Groceries");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let shell_err: ShellError = io_err.into();
        assert!(matches!(shell_err, ShellError::Io(_)));
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let shell_err: ShellError = regex_err.into();
        assert!(matches!(shell_err, ShellError::Grammar(_)));
    }
}
