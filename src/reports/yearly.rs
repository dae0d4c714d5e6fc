//! Yearly financial log.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::fmt;

use crate::ingest::EmployeeRegistry;
use crate::models::{Event, PaymentKind};

use super::Money;

/// One line of the yearly log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearlyEntry {
    /// A salary, bonus or reimbursement.
    Payment {
        /// What was paid.
        kind: PaymentKind,
        /// Who was paid.
        employee_id: String,
        /// Year of the payment date.
        year: i32,
        /// Amount paid.
        amount: Decimal,
    },
    /// An exit.
    Exit {
        /// Who left.
        employee_id: String,
        /// Year of the exit date.
        year: i32,
    },
}

/// Payment and exit events for every employee, in registry then event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyFinancialLog {
    /// Prefix used when rendering amounts.
    pub currency: String,
    /// Log lines. Onboarding events produce none.
    pub entries: Vec<YearlyEntry>,
}

impl YearlyFinancialLog {
    /// Walks every event history in the registry.
    pub fn generate(registry: &EmployeeRegistry, currency: &str) -> Self {
        let mut entries = Vec::new();

        for employee in registry {
            for event in employee.events() {
                match event {
                    Event::Payment(payment) => entries.push(YearlyEntry::Payment {
                        kind: payment.kind,
                        employee_id: employee.id.clone(),
                        year: payment.date.year(),
                        amount: payment.amount,
                    }),
                    Event::Exit { exit_date, .. } => entries.push(YearlyEntry::Exit {
                        employee_id: employee.id.clone(),
                        year: exit_date.year(),
                    }),
                    Event::Onboard { .. } => {}
                }
            }
        }

        Self {
            currency: currency.to_string(),
            entries,
        }
    }
}

impl fmt::Display for YearlyFinancialLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Yearly Financial Report:")?;
        for entry in &self.entries {
            match entry {
                YearlyEntry::Payment {
                    kind,
                    employee_id,
                    year,
                    amount,
                } => writeln!(
                    f,
                    "Event: {}, Emp Id: {}, Event Date: {}, Event Value: {}",
                    kind,
                    employee_id,
                    year,
                    Money::new(&self.currency, *amount)
                )?,
                YearlyEntry::Exit { employee_id, year } => {
                    writeln!(f, "Event: EXIT, Emp Id: {}, Exit Date: {}", employee_id, year)?
                }
            }
        }
        Ok(())
    }
}
