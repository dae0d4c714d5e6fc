//! Core data models for the payroll event engine.
//!
//! This module contains the employee record, the event tagged union and the
//! month key used for date bucketing.

mod employee;
mod event;
mod month;

pub use employee::Employee;
pub use event::{Event, EventTag, Payment, PaymentKind};
pub use month::MonthYear;
