//! Headcount report.

use std::fmt;

use crate::ingest::EmployeeRegistry;

/// The number of employees that were onboarded at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadcountReport {
    /// Distinct onboarded employee ids.
    pub total: usize,
}

impl HeadcountReport {
    /// Counts the registry.
    pub fn generate(registry: &EmployeeRegistry) -> Self {
        Self {
            total: registry.len(),
        }
    }
}

impl fmt::Display for HeadcountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of employees: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    #[test]
    fn test_counts_registered_employees() {
        let mut registry = EmployeeRegistry::new();
        for id in ["E1", "E2", "E1"] {
            registry.get_or_insert_with(id, || Employee::new(id, "A", "B", None));
        }

        let report = HeadcountReport::generate(&registry);
        assert_eq!(report.total, 2);
        assert_eq!(report.to_string(), "Total number of employees: 2\n");
    }

    #[test]
    fn test_empty_registry() {
        let report = HeadcountReport::generate(&EmployeeRegistry::new());
        assert_eq!(report.total, 0);
    }
}
