//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A ledger row that could not be read back
    #[error("Malformed ledger row at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Two expenses with different identity keys were merged
    #[error("Cannot merge expense '{left}' with '{right}': name and category must match")]
    IncompatibleMerge { left: String, right: String },

    /// A running total left the representable range of amounts
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a parse error for a given ledger line
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this is an incompatible merge error
    pub fn is_incompatible_merge(&self) -> bool {
        matches!(self, Self::IncompatibleMerge { .. })
    }

    /// Check if this is an amount overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// Check if this is a ledger parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Storage(err.to_string())
        }
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
    fn test_parse_error() {
        let err = ExpenseError::parse(3, "expected 4 fields, found 2");
        assert_eq!(
            err.to_string(),
            "Malformed ledger row at line 3: expected 4 fields, found 2"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_incompatible_merge_error() {
        let err = ExpenseError::IncompatibleMerge {
            left: "Coffee (Food)".into(),
            right: "Taxi (Travel)".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot merge expense 'Coffee (Food)' with 'Taxi (Travel)': name and category must match"
        );
        assert!(err.is_incompatible_merge());
    }

    #[test]
    fn test_overflow_error() {
        let err = ExpenseError::Overflow("Rent (Home)".into());
        assert_eq!(err.to_string(), "Amount overflow: Rent (Home)");
        assert!(err.is_overflow());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
