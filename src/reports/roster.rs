//! Monthly onboarding and exit rosters.
//!
//! Employees are bucketed by the month of each ONBOARD event's date and,
//! separately, by the month of each EXIT event's event date. An employee
//! with several qualifying events appears once per event.

use std::fmt;

use crate::config::MonthOrder;
use crate::ingest::EmployeeRegistry;
use crate::models::{Employee, Event, MonthYear};

use super::buckets::MonthBuckets;

/// Identity of an employee listed in a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Employee id.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title, if known.
    pub designation: Option<String>,
}

impl From<&Employee> for RosterEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            designation: employee.designation.clone(),
        }
    }
}

/// The employees that joined or left in one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterMonth {
    /// The month.
    pub month: MonthYear,
    /// One entry per qualifying event, in registry then event order.
    pub employees: Vec<RosterEntry>,
}

/// Onboardings and exits grouped by month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRosterReport {
    /// Months with at least one onboarding.
    pub joined: Vec<RosterMonth>,
    /// Months with at least one exit.
    pub exited: Vec<RosterMonth>,
}

impl MonthlyRosterReport {
    /// Buckets every ONBOARD and EXIT event in the registry.
    pub fn generate(registry: &EmployeeRegistry, order: MonthOrder) -> Self {
        let mut joined: MonthBuckets<Vec<RosterEntry>> = MonthBuckets::default();
        let mut exited: MonthBuckets<Vec<RosterEntry>> = MonthBuckets::default();

        for employee in registry {
            for event in employee.events() {
                let buckets = match event {
                    Event::Onboard { .. } => &mut joined,
                    Event::Exit { .. } => &mut exited,
                    Event::Payment(_) => continue,
                };
                buckets
                    .entry(MonthYear::from_date(event.date()))
                    .push(RosterEntry::from(employee));
            }
        }

        Self {
            joined: into_months(joined, order),
            exited: into_months(exited, order),
        }
    }
}

fn into_months(buckets: MonthBuckets<Vec<RosterEntry>>, order: MonthOrder) -> Vec<RosterMonth> {
    buckets
        .into_ordered(order)
        .into_iter()
        .map(|(month, employees)| RosterMonth { month, employees })
        .collect()
}

impl fmt::Display for MonthlyRosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Onboarding Report:")?;
        for bucket in &self.joined {
            writeln!(
                f,
                "{}: {} employees joined",
                bucket.month,
                bucket.employees.len()
            )?;
            for entry in &bucket.employees {
                write!(f, "- {}: {} {}", entry.id, entry.first_name, entry.last_name)?;
                if let Some(designation) = &entry.designation {
                    write!(f, ", {}", designation)?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Monthly Exiting Report:")?;
        for bucket in &self.exited {
            writeln!(
                f,
                "{}: {} employees exited",
                bucket.month,
                bucket.employees.len()
            )?;
            for entry in &bucket.employees {
                writeln!(f, "- {} {}", entry.first_name, entry.last_name)?;
            }
        }
        Ok(())
    }
}
