//! Error types for the fundep library.

use std::path::PathBuf;
use thiserror::Error;

/// Caller errors detected by the dependency checker itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The two columns handed to a dependency check have different row counts.
    #[error("length mismatch: determinant has {determinant} values, dependent has {dependent}")]
    LengthMismatch { determinant: usize, dependent: usize },
}

/// Main error type for fundep operations.
#[derive(Debug, Error)]
pub enum FundepError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed tabular data (e.g. a row with the wrong number of cells).
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error saving or loading a report.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Two columns share the same header name.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),

    /// A column name that is not present in the table.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Invalid arguments passed to the dependency checker.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Result type alias for fundep operations.
pub type Result<T> = std::result::Result<T, FundepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err: FundepError = InvalidInputError::LengthMismatch {
            determinant: 1,
            dependent: 2,
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Invalid input: length mismatch: determinant has 1 values, dependent has 2"
        );
    }

    #[test]
    fn test_duplicate_column_message() {
        let err = FundepError::DuplicateColumn("a".to_string());
        assert_eq!(err.to_string(), "Duplicate column: 'a'");
    }
}
