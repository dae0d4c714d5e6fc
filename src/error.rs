//! Error types for the payroll event engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fatal condition that can occur while loading configuration,
//! reading the event file, decoding a row, or summing amounts.
//!
//! Recoverable conditions (an event for an employee that was never onboarded,
//! an unrecognized event tag) are not errors; they are reported as
//! [`Diagnostic`](crate::ingest::Diagnostic) values instead.

use thiserror::Error;

/// The main error type for the payroll event engine.
///
/// # Example
///
/// ```
/// use payroll_events::error::PayrollError;
///
/// let error = PayrollError::InvalidAmount {
///     line: 3,
///     value: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Line 3: invalid amount 'abc'");
/// assert!(error.is_parse_error());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The input file was not found at the specified path.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The input file could not be read as delimited text.
    #[error("Failed to read input file '{path}': {message}")]
    InputRead {
        /// The path of the input file.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// A row had fewer fields than its event type requires.
    #[error("Line {line}: missing field '{field}'")]
    MissingField {
        /// The 1-based line number of the row.
        line: u64,
        /// The name of the first missing field.
        field: &'static str,
    },

    /// A date field did not match the configured date format.
    #[error("Line {line}: invalid date '{value}' in field '{field}'")]
    InvalidDate {
        /// The 1-based line number of the row.
        line: u64,
        /// The name of the date field.
        field: &'static str,
        /// The raw field value.
        value: String,
    },

    /// An amount field was not a decimal number.
    #[error("Line {line}: invalid amount '{value}'")]
    InvalidAmount {
        /// The 1-based line number of the row.
        line: u64,
        /// The raw field value.
        value: String,
    },

    /// A total exceeded the range of the decimal type.
    #[error("Amount total overflowed for {scope}")]
    AmountOverflow {
        /// What was being summed, such as an employee or a month.
        scope: String,
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

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// A description of what made the value invalid.
        message: String,
    },
}

impl PayrollError {
    /// Returns true for errors caused by a malformed input row.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PayrollError::MissingField { .. }
                | PayrollError::InvalidDate { .. }
                | PayrollError::InvalidAmount { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
