//! Row decoding.
//!
//! Rows are positional and their shape depends on the event-type tag in
//! column 5. Each tag has its own decoding function that produces a typed
//! [`Event`]; rows that are too short or carry malformed values fail with a
//! parse error instead of being indexed blindly.
//!
//! ```text
//! ONBOARD:        seq, id, first, last, designation, ONBOARD, value, date, notes
//! SALARY/BONUS/
//! REIMBURSEMENT:  seq, id, tag, amount, date, tag
//! EXIT:           seq, id, tag, exit_date, event_date, EXIT
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Event, EventTag, Payment, PaymentKind};

/// Column holding the event-type tag in every row shape.
pub const TAG_INDEX: usize = 5;

/// A decoded row, ready to be routed to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    /// The sequence number as written in the file.
    pub sequence_no: String,
    /// The employee the row refers to.
    pub employee_id: String,
    /// What the row asks the registry to do.
    pub kind: RowKind,
}

/// The tag-specific content of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// An onboarding row, carrying the identity fields for a new record.
    Onboard {
        /// Given name.
        first_name: String,
        /// Family name.
        last_name: String,
        /// Job title; `None` when the column is empty.
        designation: Option<String>,
        /// The onboarding event.
        event: Event,
    },
    /// A payment or exit for an existing record.
    Event(Event),
    /// A row whose tag is not one of the known event types.
    Unrecognized {
        /// The tag as written.
        tag: String,
    },
}

/// Decodes one row.
///
/// `line` is the 1-based line number used in errors; `date_format` is the
/// chrono format applied to every date column.
///
/// # Errors
///
/// - `MissingField` if the row is shorter than its tag requires
/// - `InvalidDate` if a date column does not match `date_format`
/// - `InvalidAmount` if the amount column is not a decimal number
///
/// # Example
///
/// ```
/// use payroll_events::ingest::{parse_row, RowKind};
///
/// let row = ["2", "E1", "SALARY", "5000", "15-01-2023", "SALARY"];
/// let parsed = parse_row(&row, 2, "%d-%m-%Y").unwrap();
///
/// assert_eq!(parsed.employee_id, "E1");
/// assert!(matches!(parsed.kind, RowKind::Event(_)));
/// ```
pub fn parse_row(fields: &[&str], line: u64, date_format: &str) -> PayrollResult<ParsedRow> {
    let sequence_no = field(fields, 0, "sequence_no", line)?.to_string();
    let employee_id = field(fields, 1, "employee_id", line)?.to_string();
    let raw_tag = field(fields, TAG_INDEX, "event_type", line)?;

    let kind = match raw_tag.parse::<EventTag>() {
        Ok(EventTag::Onboard) => parse_onboard(fields, line, date_format)?,
        Ok(EventTag::Exit) => RowKind::Event(parse_exit(fields, line, date_format)?),
        Ok(tag) => match PaymentKind::from_tag(tag) {
            Some(kind) => RowKind::Event(parse_payment(kind, fields, line, date_format)?),
            None => RowKind::Unrecognized {
                tag: raw_tag.to_string(),
            },
        },
        Err(tag) => RowKind::Unrecognized { tag },
    };

    Ok(ParsedRow {
        sequence_no,
        employee_id,
        kind,
    })
}

fn parse_onboard(fields: &[&str], line: u64, date_format: &str) -> PayrollResult<RowKind> {
    let first_name = field(fields, 2, "first_name", line)?;
    let last_name = field(fields, 3, "last_name", line)?;
    let designation = field(fields, 4, "designation", line)?;
    let date = field(fields, 7, "event_date", line)?;
    let notes = field(fields, 8, "notes", line)?;

    Ok(RowKind::Onboard {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        designation: (!designation.is_empty()).then(|| designation.to_string()),
        event: Event::Onboard {
            date: parse_date(date, "event_date", line, date_format)?,
            notes: notes.to_string(),
        },
    })
}

fn parse_payment(
    kind: PaymentKind,
    fields: &[&str],
    line: u64,
    date_format: &str,
) -> PayrollResult<Event> {
    let amount = field(fields, 3, "amount", line)?;
    let date = field(fields, 4, "event_date", line)?;
    let notes = field(fields, TAG_INDEX, "notes", line)?;

    Ok(Event::Payment(Payment {
        kind,
        amount: parse_amount(amount, line)?,
        date: parse_date(date, "event_date", line, date_format)?,
        notes: notes.to_string(),
    }))
}

fn parse_exit(fields: &[&str], line: u64, date_format: &str) -> PayrollResult<Event> {
    let exit_date = field(fields, 3, "exit_date", line)?;
    let event_date = field(fields, 4, "event_date", line)?;
    let notes = field(fields, TAG_INDEX, "notes", line)?;

    Ok(Event::Exit {
        exit_date: parse_date(exit_date, "exit_date", line, date_format)?,
        event_date: parse_date(event_date, "event_date", line, date_format)?,
        notes: notes.to_string(),
    })
}

fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
    line: u64,
) -> PayrollResult<&'a str> {
    fields
        .get(index)
        .copied()
        .ok_or(PayrollError::MissingField { line, field: name })
}

fn parse_date(
    value: &str,
    name: &'static str,
    line: u64,
    date_format: &str,
) -> PayrollResult<NaiveDate> {
    NaiveDate::parse_from_str(value, date_format).map_err(|_| PayrollError::InvalidDate {
        line,
        field: name,
        value: value.to_string(),
    })
}

fn parse_amount(value: &str, line: u64) -> PayrollResult<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| PayrollError::InvalidAmount {
            line,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%d-%m-%Y";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_onboard_row() {
        let row = [
            "1", "E1", "John", "Doe", "Engineer", "ONBOARD", "", "01-01-2023", "welcome",
        ];
        let parsed = parse_row(&row, 1, FORMAT).unwrap();

        assert_eq!(parsed.sequence_no, "1");
        assert_eq!(parsed.employee_id, "E1");
        assert_eq!(
            parsed.kind,
            RowKind::Onboard {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                designation: Some("Engineer".to_string()),
                event: Event::Onboard {
                    date: date(2023, 1, 1),
                    notes: "welcome".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_parse_onboard_empty_designation_is_none() {
        let row = ["1", "E1", "John", "Doe", "", "ONBOARD", "", "01-01-2023", ""];
        match parse_row(&row, 1, FORMAT).unwrap().kind {
            RowKind::Onboard { designation, .. } => assert_eq!(designation, None),
            other => panic!("Expected onboard row, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_onboard_missing_notes() {
        let row = ["1", "E1", "John", "Doe", "Engineer", "ONBOARD", "", "01-01-2023"];
        match parse_row(&row, 4, FORMAT) {
            Err(PayrollError::MissingField { line, field }) => {
                assert_eq!(line, 4);
                assert_eq!(field, "notes");
            }
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_payment_rows() {
        for (tag, kind) in [
            ("SALARY", PaymentKind::Salary),
            ("BONUS", PaymentKind::Bonus),
            ("REIMBURSEMENT", PaymentKind::Reimbursement),
        ] {
            let row = ["2", "E1", tag, "1234.56", "15-01-2023", tag];
            let parsed = parse_row(&row, 2, FORMAT).unwrap();
            assert_eq!(
                parsed.kind,
                RowKind::Event(Event::Payment(Payment {
                    kind,
                    amount: dec("1234.56"),
                    date: date(2023, 1, 15),
                    notes: tag.to_string(),
                }))
            );
        }
    }

    #[test]
    fn test_parse_exit_row() {
        let row = ["4", "E1", "EXIT", "31-01-2023", "02-02-2023", "EXIT"];
        let parsed = parse_row(&row, 4, FORMAT).unwrap();
        assert_eq!(
            parsed.kind,
            RowKind::Event(Event::Exit {
                exit_date: date(2023, 1, 31),
                event_date: date(2023, 2, 2),
                notes: "EXIT".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_tag_is_unrecognized() {
        let row = ["5", "E1", "PROMOTION", "0", "01-02-2023", "PROMOTION"];
        let parsed = parse_row(&row, 5, FORMAT).unwrap();
        assert_eq!(
            parsed.kind,
            RowKind::Unrecognized {
                tag: "PROMOTION".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_tag_skips_field_validation() {
        let row = ["5", "E1", "x", "not-a-number", "not-a-date", "TRANSFER"];
        assert!(parse_row(&row, 5, FORMAT).is_ok());
    }

    #[test]
    fn test_short_row_is_missing_event_type() {
        let row = ["1", "E1", "SALARY", "100"];
        match parse_row(&row, 9, FORMAT) {
            Err(PayrollError::MissingField { line, field }) => {
                assert_eq!(line, 9);
                assert_eq!(field, "event_type");
            }
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_amount() {
        let row = ["2", "E1", "SALARY", "five", "15-01-2023", "SALARY"];
        match parse_row(&row, 2, FORMAT) {
            Err(PayrollError::InvalidAmount { value, .. }) => assert_eq!(value, "five"),
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let row = ["3", "E1", "REIMBURSEMENT", "-250.00", "20-01-2023", "REIMBURSEMENT"];
        let parsed = parse_row(&row, 3, FORMAT).unwrap();
        match parsed.kind {
            RowKind::Event(event) => assert_eq!(event.amount(), Some(dec("-250.00"))),
            other => panic!("Expected payment row, got {:?}", other),
        }
    }

    #[test]
    fn test_scientific_amount_is_accepted() {
        let row = ["2", "E1", "BONUS", "1e3", "15-01-2023", "BONUS"];
        let parsed = parse_row(&row, 2, FORMAT).unwrap();
        match parsed.kind {
            RowKind::Event(event) => assert_eq!(event.amount(), Some(dec("1000"))),
            other => panic!("Expected payment row, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date() {
        let row = ["2", "E1", "SALARY", "100", "2023-01-15", "SALARY"];
        match parse_row(&row, 2, FORMAT) {
            Err(PayrollError::InvalidDate { field, value, .. }) => {
                assert_eq!(field, "event_date");
                assert_eq!(value, "2023-01-15");
            }
            other => panic!("Expected InvalidDate error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_exit_date_names_exit_field() {
        let row = ["4", "E1", "EXIT", "31-13-2023", "31-01-2023", "EXIT"];
        match parse_row(&row, 4, FORMAT) {
            Err(PayrollError::InvalidDate { field, .. }) => assert_eq!(field, "exit_date"),
            other => panic!("Expected InvalidDate error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_date_format() {
        let row = ["2", "E1", "SALARY", "100", "2023/01/15", "SALARY"];
        let parsed = parse_row(&row, 2, "%Y/%m/%d").unwrap();
        match parsed.kind {
            RowKind::Event(event) => assert_eq!(event.date(), date(2023, 1, 15)),
            other => panic!("Expected payment row, got {:?}", other),
        }
    }
}
