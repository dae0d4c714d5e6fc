//! Report generation.
//!
//! Five independent, read-only passes over the [`EmployeeRegistry`]. Each
//! pass produces a typed report that renders as console text through
//! `Display`; [`PayrollReport`] runs all five and renders them in a fixed
//! order.
//!
//! # Example
//!
//! ```
//! use payroll_events::config::ReportConfig;
//! use payroll_events::ingest::PayrollProcessor;
//!
//! let input = "1,E1,John,Doe,Engineer,ONBOARD,,01-01-2023,welcome\n\
//!              2,E1,SALARY,5000,15-01-2023,SALARY\n";
//!
//! let mut processor = PayrollProcessor::new(ReportConfig::default());
//! processor.load_reader(input.as_bytes())?;
//! let report = processor.generate_reports()?;
//!
//! assert_eq!(report.headcount.total, 1);
//! assert!(report.to_string().contains("E1: John Doe - Total Paid: $5000.00"));
//! # Ok::<(), payroll_events::error::PayrollError>(())
//! ```

mod buckets;
mod disbursement;
mod financial;
mod headcount;
mod money;
mod roster;
mod yearly;

use std::fmt;

use crate::config::ReportConfig;
use crate::error::PayrollResult;
use crate::ingest::EmployeeRegistry;

pub use disbursement::{MonthlyDisbursementReport, MonthlyTotal};
pub use financial::{EmployeeFinancialReport, EmployeeTotal};
pub use headcount::HeadcountReport;
pub use money::Money;
pub use roster::{MonthlyRosterReport, RosterEntry, RosterMonth};
pub use yearly::{YearlyEntry, YearlyFinancialLog};

/// All five reports, generated from the same registry snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollReport {
    /// Number of onboarded employees.
    pub headcount: HeadcountReport,
    /// Onboardings and exits by month.
    pub roster: MonthlyRosterReport,
    /// Total paid per employee.
    pub financials: EmployeeFinancialReport,
    /// Payments summed by month.
    pub disbursements: MonthlyDisbursementReport,
    /// Payment and exit lines by year.
    pub yearly: YearlyFinancialLog,
}

impl PayrollReport {
    /// Runs every report pass over `registry`.
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if an employee or monthly total cannot be represented.
    pub fn generate(registry: &EmployeeRegistry, config: &ReportConfig) -> PayrollResult<Self> {
        let currency = config.currency_symbol.as_str();
        Ok(Self {
            headcount: HeadcountReport::generate(registry),
            roster: MonthlyRosterReport::generate(registry, config.month_order),
            financials: EmployeeFinancialReport::generate(registry, currency)?,
            disbursements: MonthlyDisbursementReport::generate(
                registry,
                config.month_order,
                currency,
            )?,
            yearly: YearlyFinancialLog::generate(registry, currency),
        })
    }
}

impl fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headcount)?;
        write!(f, "{}", self.roster)?;
        writeln!(f)?;
        write!(f, "{}", self.financials)?;
        writeln!(f)?;
        write!(f, "{}", self.disbursements)?;
        writeln!(f)?;
        write!(f, "{}", self.yearly)
    }
}
