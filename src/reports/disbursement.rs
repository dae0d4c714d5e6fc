//! Monthly disbursement totals.

use rust_decimal::Decimal;
use std::fmt;

use crate::config::MonthOrder;
use crate::error::{PayrollError, PayrollResult};
use crate::ingest::EmployeeRegistry;
use crate::models::{Event, MonthYear};

use super::Money;
use super::buckets::MonthBuckets;

/// Amount released in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// The month of the payment dates.
    pub month: MonthYear,
    /// Sum of every payment dated in the month.
    pub total: Decimal,
}

/// Payments across all employees, summed by month of payment date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyDisbursementReport {
    /// Prefix used when rendering amounts.
    pub currency: String,
    /// One entry per month with at least one payment.
    pub months: Vec<MonthlyTotal>,
}

impl MonthlyDisbursementReport {
    /// Buckets every payment event in the registry.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if a month's total leaves the range of [`Decimal`].
    pub fn generate(
        registry: &EmployeeRegistry,
        order: MonthOrder,
        currency: &str,
    ) -> PayrollResult<Self> {
        let mut buckets: MonthBuckets<Decimal> = MonthBuckets::default();

        for employee in registry {
            for event in employee.events() {
                if let Event::Payment(payment) = event {
                    let month = MonthYear::from_date(payment.date);
                    let total = buckets.entry(month);
                    *total = total.checked_add(payment.amount).ok_or_else(|| {
                        PayrollError::AmountOverflow {
                            scope: format!("month {month}"),
                        }
                    })?;
                }
            }
        }

        let months = buckets
            .into_ordered(order)
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect();

        Ok(Self {
            currency: currency.to_string(),
            months,
        })
    }

    /// Sum over all months.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if the sum leaves the range of [`Decimal`].
    pub fn grand_total(&self) -> PayrollResult<Decimal> {
        self.months
            .iter()
            .try_fold(Decimal::ZERO, |sum, m| sum.checked_add(m.total))
            .ok_or_else(|| PayrollError::AmountOverflow {
                scope: "all months".to_string(),
            })
    }
}

impl fmt::Display for MonthlyDisbursementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Amount Released Report:")?;
        for entry in &self.months {
            writeln!(
                f,
                "{}: Total Amount Released: {}",
                entry.month,
                Money::new(&self.currency, entry.total)
            )?;
        }
        Ok(())
    }
}
