//! Non-fatal ingestion outcomes.
//!
//! Rows that are well formed but cannot be applied are skipped rather than
//! failing the run. Each skip is recorded as a [`Diagnostic`] so callers can
//! see exactly which rows were dropped and why.

use std::fmt;

/// Why a row was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A payment or exit referred to an employee with no prior onboarding.
    UnknownEmployee,
    /// The event-type tag was not one of the known values.
    UnknownEventTag {
        /// The tag as written.
        tag: String,
    },
}

/// A skipped row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The 1-based input line of the row.
    pub line: u64,
    /// The sequence number as written in the row.
    pub sequence_no: String,
    /// The employee id the row referred to.
    pub employee_id: String,
    /// Why it was skipped.
    pub kind: ErrorKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnknownEmployee => write!(
                f,
                "Line {} (seq {}): skipped event for unknown employee '{}'",
                self.line, self.sequence_no, self.employee_id
            ),
            ErrorKind::UnknownEventTag { tag } => write!(
                f,
                "Line {} (seq {}): skipped unrecognized event '{}' for employee '{}'",
                self.line, self.sequence_no, tag, self.employee_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_employee_display() {
        let diagnostic = Diagnostic {
            line: 2,
            sequence_no: "2".to_string(),
            employee_id: "E9".to_string(),
            kind: ErrorKind::UnknownEmployee,
        };
        assert_eq!(
            diagnostic.to_string(),
            "Line 2 (seq 2): skipped event for unknown employee 'E9'"
        );
    }

    #[test]
    fn test_unknown_tag_display() {
        let diagnostic = Diagnostic {
            line: 5,
            sequence_no: "5".to_string(),
            employee_id: "E1".to_string(),
            kind: ErrorKind::UnknownEventTag {
                tag: "TRANSFER".to_string(),
            },
        };
        assert_eq!(
            diagnostic.to_string(),
            "Line 5 (seq 5): skipped unrecognized event 'TRANSFER' for employee 'E1'"
        );
    }
}
