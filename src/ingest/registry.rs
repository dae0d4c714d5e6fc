//! Employee registry.

use std::collections::HashMap;
use std::slice;

use crate::models::Employee;

/// Employees keyed by id, iterated in the order they were first onboarded.
///
/// # Example
///
/// ```
/// use payroll_events::ingest::EmployeeRegistry;
/// use payroll_events::models::Employee;
///
/// let mut registry = EmployeeRegistry::new();
/// registry.get_or_insert_with("E2", || Employee::new("E2", "Jane", "Roe", None));
/// registry.get_or_insert_with("E1", || Employee::new("E1", "John", "Doe", None));
///
/// let ids: Vec<&str> = registry.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(ids, ["E2", "E1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employee has been onboarded.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns true if `id` has been registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.index.get(id).map(|&i| &self.employees[i])
    }

    /// Looks up an employee by id for appending events.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Employee> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.employees[i]),
            None => None,
        }
    }

    /// Returns the employee with `id`, registering the one built by `create`
    /// if the id is new.
    pub fn get_or_insert_with<F>(&mut self, id: &str, create: F) -> &mut Employee
    where
        F: FnOnce() -> Employee,
    {
        let i = match self.index.get(id) {
            Some(&i) => i,
            None => {
                let i = self.employees.len();
                self.employees.push(create());
                self.index.insert(id.to_string(), i);
                i
            }
        };
        &mut self.employees[i]
    }

    /// Iterates employees in registration order.
    pub fn iter(&self) -> slice::Iter<'_, Employee> {
        self.employees.iter()
    }
}

impl<'a> IntoIterator for &'a EmployeeRegistry {
    type Item = &'a Employee;
    type IntoIter = slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
