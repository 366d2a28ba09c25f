//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

use crate::models::ExpenseValidationError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (writing the ledger, temp files, renames)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A required text field was left empty
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// Amount input was not a number, or not strictly positive
    #[error("Invalid amount '{0}': please enter a valid positive number")]
    InvalidAmount(String),

    /// Entity not found errors
    #[error("No {entity_type} found with ID {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The ledger file exists but does not hold a valid expense list
    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// The sum of the ledger does not fit in an amount
    #[error("Total of all expenses is too large to compute")]
    TotalOverflow,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "expense",
            identifier: identifier.to_string(),
        }
    }

    /// Create an "empty field" error for the description
    pub fn empty_description() -> Self {
        Self::EmptyField {
            field: "Description",
        }
    }

    /// Create a corrupt data error for a file
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (bad user input)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyField { .. } | Self::InvalidAmount(_))
    }

    /// Check if this error came from reading a damaged ledger file
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ExpenseValidationError> for ExpenseError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::EmptyDescription => Self::empty_description(),
            ExpenseValidationError::NonPositiveAmount(amount)
            | ExpenseValidationError::AmountTooLarge(amount) => {
                Self::InvalidAmount(amount.to_string())
            }
        }
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_not_found(7);
        assert_eq!(err.to_string(), "No expense found with ID 7");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_errors() {
        let err = ExpenseError::empty_description();
        assert_eq!(err.to_string(), "Description cannot be empty");
        assert!(err.is_validation());

        let err = ExpenseError::InvalidAmount("abc".into());
        assert!(err.is_validation());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_corrupt_error() {
        let err = ExpenseError::corrupt(Path::new("/tmp/expenses.json"), "expected array");
        assert_eq!(
            err.to_string(),
            "Corrupt data in /tmp/expenses.json: expected array"
        );
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
