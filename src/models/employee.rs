//! Employee record and its derived queries.
//!
//! An [`Employee`] holds identity fields plus the ordered history of every
//! event recorded against it. Totals and dates are re-derived from the
//! history on each call; nothing is cached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

use super::Event;
use crate::error::{PayrollError, PayrollResult};

/// An employee and their event history.
///
/// # Example
///
/// ```
/// use payroll_events::models::{Employee, Event};
/// use chrono::NaiveDate;
///
/// let mut employee = Employee::new("E1", "John", "Doe", Some("Engineer".to_string()));
/// employee.add_event(Event::Onboard {
///     date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     notes: "welcome".to_string(),
/// });
///
/// assert_eq!(employee.to_string(), "E1: John Doe, Engineer");
/// assert_eq!(employee.onboard_date(), NaiveDate::from_ymd_opt(2023, 1, 1));
/// assert_eq!(employee.exit_date(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title, when one was supplied at onboarding.
    pub designation: Option<String>,
    events: Vec<Event>,
}

impl Employee {
    /// Creates an employee with an empty event history.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        designation: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            designation,
            events: Vec::new(),
        }
    }

    /// Appends an event to the history.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Returns the event history in input order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Sums every salary, bonus and reimbursement in the history.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if the sum leaves the range of [`Decimal`].
    pub fn total_paid(&self) -> PayrollResult<Decimal> {
        self.events
            .iter()
            .filter_map(Event::amount)
            .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
            .ok_or_else(|| PayrollError::AmountOverflow {
                scope: format!("employee {}", self.id),
            })
    }

    /// Returns the date of the first onboarding event.
    pub fn onboard_date(&self) -> Option<NaiveDate> {
        self.events.iter().find_map(|event| match event {
            Event::Onboard { date, .. } => Some(*date),
            _ => None,
        })
    }

    /// Returns the exit date of the first exit event.
    pub fn exit_date(&self) -> Option<NaiveDate> {
        self.events.iter().find_map(|event| match event {
            Event::Exit { exit_date, .. } => Some(*exit_date),
            _ => None,
        })
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.id, self.first_name, self.last_name)?;
        if let Some(designation) = &self.designation {
            write!(f, ", {}", designation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Payment, PaymentKind};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment(kind: PaymentKind, amount: &str, on: NaiveDate) -> Event {
        Event::Payment(Payment {
            kind,
            amount: dec(amount),
            date: on,
            notes: kind.to_string(),
        })
    }

    fn onboard(on: NaiveDate) -> Event {
        Event::Onboard {
            date: on,
            notes: String::new(),
        }
    }

    fn exit(exit_date: NaiveDate, event_date: NaiveDate) -> Event {
        Event::Exit {
            exit_date,
            event_date,
            notes: "EXIT".to_string(),
        }
    }

    fn create_test_employee() -> Employee {
        Employee::new("E1", "John", "Doe", Some("Engineer".to_string()))
    }

    #[test]
    fn test_total_paid_sums_all_payment_kinds() {
        let mut employee = create_test_employee();
        employee.add_event(onboard(date(2023, 1, 1)));
        employee.add_event(payment(PaymentKind::Salary, "5000", date(2023, 1, 15)));
        employee.add_event(payment(PaymentKind::Bonus, "1000", date(2023, 1, 15)));
        employee.add_event(payment(
            PaymentKind::Reimbursement,
            "250.75",
            date(2023, 2, 1),
        ));
        employee.add_event(exit(date(2023, 2, 28), date(2023, 2, 28)));

        assert_eq!(employee.total_paid().unwrap(), dec("6250.75"));
    }

    #[test]
    fn test_total_paid_is_zero_without_payments() {
        let mut employee = create_test_employee();
        employee.add_event(onboard(date(2023, 1, 1)));
        assert_eq!(employee.total_paid().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_total_paid_includes_negative_amounts() {
        let mut employee = create_test_employee();
        employee.add_event(payment(PaymentKind::Salary, "1000", date(2023, 1, 15)));
        employee.add_event(payment(PaymentKind::Reimbursement, "-250.00", date(2023, 1, 20)));
        assert_eq!(employee.total_paid().unwrap(), dec("750.00"));
    }

    #[test]
    fn test_total_paid_overflow_is_an_error() {
        let mut employee = create_test_employee();
        employee.add_event(payment(
            PaymentKind::Salary,
            "79228162514264337593543950335",
            date(2023, 1, 15),
        ));
        employee.add_event(payment(PaymentKind::Bonus, "1", date(2023, 1, 31)));

        match employee.total_paid() {
            Err(PayrollError::AmountOverflow { scope }) => assert_eq!(scope, "employee E1"),
            other => panic!("Expected AmountOverflow error, got {:?}", other),
        }
    }

    #[test]
    fn test_onboard_date_returns_first_onboard() {
        let mut employee = create_test_employee();
        employee.add_event(onboard(date(2023, 1, 1)));
        employee.add_event(onboard(date(2024, 6, 1)));
        assert_eq!(employee.onboard_date(), Some(date(2023, 1, 1)));
    }

    #[test]
    fn test_exit_date_uses_exit_date_field() {
        let mut employee = create_test_employee();
        employee.add_event(onboard(date(2023, 1, 1)));
        employee.add_event(exit(date(2023, 3, 31), date(2023, 4, 2)));
        employee.add_event(exit(date(2023, 5, 31), date(2023, 5, 31)));
        assert_eq!(employee.exit_date(), Some(date(2023, 3, 31)));
    }

    #[test]
    fn test_dates_absent_without_events() {
        let employee = create_test_employee();
        assert_eq!(employee.onboard_date(), None);
        assert_eq!(employee.exit_date(), None);
    }

    #[test]
    fn test_queries_follow_appended_events() {
        let mut employee = create_test_employee();
        employee.add_event(payment(PaymentKind::Salary, "100", date(2023, 1, 15)));
        assert_eq!(employee.total_paid().unwrap(), dec("100"));

        employee.add_event(payment(PaymentKind::Salary, "100", date(2023, 2, 15)));
        assert_eq!(employee.total_paid().unwrap(), dec("200"));
        assert_eq!(employee.total_paid().unwrap(), dec("200"));
    }

    #[test]
    fn test_display_without_designation() {
        let employee = Employee::new("E2", "Jane", "Roe", None);
        assert_eq!(employee.to_string(), "E2: Jane Roe");
        assert_eq!(employee.full_name(), "Jane Roe");
    }
}
