//! Roster snapshot - the four department collections

use super::department::Department;
use super::employee::Employee;
use serde::{Deserialize, Serialize};

/// Employees of one department, in insertion order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepartmentData {
    pub employees: Vec<Employee>,
}

impl DepartmentData {
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

/// Whole persisted state: one collection per department.
///
/// A snapshot is never edited in place by roster operations; each operation
/// builds a new `Roster` that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "cuisine", default)]
    pub kitchen: DepartmentData,
    #[serde(rename = "chawarma", default)]
    pub shawarma: DepartmentData,
    #[serde(default)]
    pub pizza: DepartmentData,
    #[serde(rename = "serveurs", default)]
    pub servers: DepartmentData,
}

impl Roster {
    pub fn department(&self, department: Department) -> &DepartmentData {
        match department {
            Department::Kitchen => &self.kitchen,
            Department::Shawarma => &self.shawarma,
            Department::Pizza => &self.pizza,
            Department::Servers => &self.servers,
        }
    }

    pub fn employees(&self, department: Department) -> &[Employee] {
        &self.department(department).employees
    }

    /// New snapshot with one department's collection replaced
    pub fn with_department(&self, department: Department, data: DepartmentData) -> Self {
        let mut next = self.clone();
        *next.department_mut(department) = data;
        next
    }

    fn department_mut(&mut self, department: Department) -> &mut DepartmentData {
        match department {
            Department::Kitchen => &mut self.kitchen,
            Department::Shawarma => &mut self.shawarma,
            Department::Pizza => &mut self.pizza,
            Department::Servers => &mut self.servers,
        }
    }

    /// Employee count over all departments
    pub fn headcount(&self) -> usize {
        Department::ALL
            .iter()
            .map(|d| self.department(*d).employees.len())
            .sum()
    }
}
