//! Error types for the salary reporter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a report run can hit: malformed input, records that
//! fail validation, configuration problems, and I/O at the file boundary.

use thiserror::Error;

/// The main error type for the salary reporter.
///
/// Every fallible operation in the crate returns this error type. Core
/// pipeline stages only ever produce [`ReportError::Parse`],
/// [`ReportError::Validation`] and [`ReportError::RowWidth`]; the remaining
/// variants come from configuration loading and the file collaborators.
///
/// # Example
///
/// ```
/// use salary_reporter::error::ReportError;
///
/// let error = ReportError::ConfigNotFound {
///     path: "/missing/report.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/report.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input was not well-formed employee JSON.
    #[error("Failed to parse employee records: {message}")]
    Parse {
        /// A description of the parse error.
        message: String,
    },

    /// A record parsed but is missing a required field or holds an invalid value.
    #[error("Invalid employee record {index}, field '{field}': {message}")]
    Validation {
        /// Zero-based position of the record in the input array.
        index: usize,
        /// The offending field, using its input (camelCase) name.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A table row did not have as many cells as the header.
    #[error("Table row has {actual} cells, expected {expected}")]
    RowWidth {
        /// Number of header cells.
        expected: usize,
        /// Number of cells in the rejected row.
        actual: usize,
    },

    /// Reading the input or writing the output failed.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path being read or written.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::Parse {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
