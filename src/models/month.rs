//! Calendar month keys used for bucketing events.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month within a year, displayed as `MM-YYYY`.
///
/// Ordering is chronological (year first, then month).
///
/// # Example
///
/// ```
/// use payroll_events::models::MonthYear;
/// use chrono::NaiveDate;
///
/// let month = MonthYear::from_date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
/// assert_eq!(month.to_string(), "01-2023");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    /// The calendar year.
    pub year: i32,
    /// The month, 1 through 12.
    pub month: u32,
}

impl MonthYear {
    /// Returns the month that contains `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}
