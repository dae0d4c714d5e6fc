//! Configuration types for payroll event reporting.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{PayrollError, PayrollResult};

/// The order in which month buckets are listed in the monthly reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrder {
    /// Buckets appear in the order their month was first seen in the input.
    #[default]
    FirstSeen,
    /// Buckets are sorted by year, then month.
    Chronological,
}

/// Settings controlling how the event file is read and how reports render.
///
/// All fields are optional in YAML; omitted fields take the values of
/// [`ReportConfig::default`].
///
/// # Example
///
/// ```
/// use payroll_events::config::{MonthOrder, ReportConfig};
///
/// let config = ReportConfig::default();
/// assert_eq!(config.delimiter, ",");
/// assert_eq!(config.date_format, "%d-%m-%Y");
/// assert_eq!(config.month_order, MonthOrder::FirstSeen);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// The event file read when none is given on the command line.
    pub input: PathBuf,
    /// The field delimiter. Must be a single ASCII character.
    pub delimiter: String,
    /// The chrono format string used for every date field.
    pub date_format: String,
    /// The prefix printed before monetary amounts.
    pub currency_symbol: String,
    /// The ordering of month buckets in the monthly reports.
    pub month_order: MonthOrder,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("employee_details.txt"),
            delimiter: ",".to_string(),
            date_format: "%d-%m-%Y".to_string(),
            currency_symbol: "$".to_string(),
            month_order: MonthOrder::FirstSeen,
        }
    }
}

impl ReportConfig {
    /// Checks the values that serde cannot constrain on its own.
    pub fn validate(&self) -> PayrollResult<()> {
        self.delimiter_byte()?;

        if self.date_format.trim().is_empty() {
            return Err(PayrollError::InvalidConfig {
                field: "date_format",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> PayrollResult<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(PayrollError::InvalidConfig {
                field: "delimiter",
                message: format!(
                    "must be a single ASCII character, got '{}'",
                    self.delimiter
                ),
            }),
        }
    }
}
