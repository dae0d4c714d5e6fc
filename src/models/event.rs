//! Payroll event types.
//!
//! Each row of the event file becomes exactly one [`Event`]. Events are
//! immutable once created and are owned by the [`Employee`](super::Employee)
//! they belong to.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The event-type tag carried by every input row.
///
/// # Example
///
/// ```
/// use payroll_events::models::EventTag;
///
/// assert_eq!("BONUS".parse::<EventTag>(), Ok(EventTag::Bonus));
/// assert!("PROMOTION".parse::<EventTag>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    /// An employee joined.
    Onboard,
    /// A salary payment.
    Salary,
    /// A bonus payment.
    Bonus,
    /// An expense reimbursement.
    Reimbursement,
    /// An employee left.
    Exit,
}

impl EventTag {
    /// Returns the tag as it appears in the input file.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventTag::Onboard => "ONBOARD",
            EventTag::Salary => "SALARY",
            EventTag::Bonus => "BONUS",
            EventTag::Reimbursement => "REIMBURSEMENT",
            EventTag::Exit => "EXIT",
        }
    }
}

impl FromStr for EventTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONBOARD" => Ok(EventTag::Onboard),
            "SALARY" => Ok(EventTag::Salary),
            "BONUS" => Ok(EventTag::Bonus),
            "REIMBURSEMENT" => Ok(EventTag::Reimbursement),
            "EXIT" => Ok(EventTag::Exit),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a monetary disbursement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentKind {
    /// Regular salary.
    Salary,
    /// One-off bonus.
    Bonus,
    /// Expense reimbursement.
    Reimbursement,
}

impl PaymentKind {
    /// Returns the matching payment kind for a tag, if the tag is a payment.
    pub fn from_tag(tag: EventTag) -> Option<Self> {
        match tag {
            EventTag::Salary => Some(PaymentKind::Salary),
            EventTag::Bonus => Some(PaymentKind::Bonus),
            EventTag::Reimbursement => Some(PaymentKind::Reimbursement),
            EventTag::Onboard | EventTag::Exit => None,
        }
    }

    /// Returns the tag this payment kind was read from.
    pub fn tag(&self) -> EventTag {
        match self {
            PaymentKind::Salary => EventTag::Salary,
            PaymentKind::Bonus => EventTag::Bonus,
            PaymentKind::Reimbursement => EventTag::Reimbursement,
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tag().fmt(f)
    }
}

/// A salary, bonus or reimbursement paid to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// What the payment was for.
    pub kind: PaymentKind,
    /// The amount paid. Never converted between currencies.
    pub amount: Decimal,
    /// The date the payment was made.
    pub date: NaiveDate,
    /// Free-text notes.
    pub notes: String,
}

/// One entry in an employee's event history.
///
/// # Example
///
/// ```
/// use payroll_events::models::{Event, EventTag, Payment, PaymentKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let event = Event::Payment(Payment {
///     kind: PaymentKind::Salary,
///     amount: Decimal::new(500000, 2),
///     date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
///     notes: "SALARY".to_string(),
/// });
/// assert_eq!(event.tag(), EventTag::Salary);
/// assert_eq!(event.amount(), Some(Decimal::new(5000, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The employee joined on `date`.
    Onboard {
        /// The onboarding date.
        date: NaiveDate,
        /// Free-text notes.
        notes: String,
    },
    /// The employee was paid.
    Payment(Payment),
    /// The employee left.
    Exit {
        /// The last day of employment.
        exit_date: NaiveDate,
        /// The date the exit was recorded, which may differ from `exit_date`.
        event_date: NaiveDate,
        /// Free-text notes.
        notes: String,
    },
}

impl Event {
    /// Returns the tag this event was decoded from.
    pub fn tag(&self) -> EventTag {
        match self {
            Event::Onboard { .. } => EventTag::Onboard,
            Event::Payment(payment) => payment.kind.tag(),
            Event::Exit { .. } => EventTag::Exit,
        }
    }

    /// Returns the date the event was recorded on.
    ///
    /// For exits this is the event date, not the exit date.
    pub fn date(&self) -> NaiveDate {
        match self {
            Event::Onboard { date, .. } => *date,
            Event::Payment(payment) => payment.date,
            Event::Exit { event_date, .. } => *event_date,
        }
    }

    /// Returns the amount for payment events.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Event::Payment(payment) => Some(payment.amount),
            _ => None,
        }
    }

    /// Returns the free-text notes.
    pub fn notes(&self) -> &str {
        match self {
            Event::Onboard { notes, .. } | Event::Exit { notes, .. } => notes,
            Event::Payment(payment) => &payment.notes,
        }
    }
}
