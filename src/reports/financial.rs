//! Per-employee payment totals.

use rust_decimal::Decimal;
use std::fmt;

use crate::error::PayrollResult;
use crate::ingest::EmployeeRegistry;

use super::Money;

/// Total paid to one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeTotal {
    /// Employee id.
    pub id: String,
    /// "first last".
    pub name: String,
    /// Sum of salaries, bonuses and reimbursements.
    pub total_paid: Decimal,
}

/// Totals for every employee, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFinancialReport {
    /// Prefix used when rendering amounts.
    pub currency: String,
    /// One entry per registered employee.
    pub employees: Vec<EmployeeTotal>,
}

impl EmployeeFinancialReport {
    /// Re-derives each employee's total from their event history.
    pub fn generate(registry: &EmployeeRegistry, currency: &str) -> PayrollResult<Self> {
        let employees = registry
            .iter()
            .map(|employee| -> PayrollResult<EmployeeTotal> {
                Ok(EmployeeTotal {
                    id: employee.id.clone(),
                    name: employee.full_name(),
                    total_paid: employee.total_paid()?,
                })
            })
            .collect::<PayrollResult<Vec<_>>>()?;

        Ok(Self {
            currency: currency.to_string(),
            employees,
        })
    }
}

impl fmt::Display for EmployeeFinancialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee Financial Reports:")?;
        for entry in &self.employees {
            writeln!(
                f,
                "{}: {} - Total Paid: {}",
                entry.id,
                entry.name,
                Money::new(&self.currency, entry.total_paid)
            )?;
        }
        Ok(())
    }
}
