//! Roster operations
//!
//! Every operation takes the current snapshot and returns a [`StoreOutcome`]:
//! either a new [`Roster`] that replaces it, or the reason the operation was
//! declined. The input snapshot is never modified, and every record an
//! operation touches leaves with a refreshed `total_pay`.
//!
//! Deleting an employee and clearing a department are reachable only
//! through [`super::confirm`].

use super::calculator;
use shared::models::{
    Department, DepartmentData, Employee, PayRates, Roster, ShiftType, Week, Weekday,
};
use shared::util::snowflake_id;

/// Result of a roster operation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    /// New snapshot replacing the previous one
    Updated(Roster),
    /// Nothing changed
    Unchanged(Declined),
}

/// Why an operation left the snapshot untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declined {
    /// Name is empty after trimming
    EmptyName,
    /// No employee with this id in the department
    EmployeeNotFound(String),
}

impl std::fmt::Display for Declined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "employee name is empty"),
            Self::EmployeeNotFound(id) => write!(f, "employee {} not found", id),
        }
    }
}

impl StoreOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// New snapshot, if any
    pub fn into_roster(self) -> Option<Roster> {
        match self {
            Self::Updated(roster) => Some(roster),
            Self::Unchanged(_) => None,
        }
    }
}

/// Append a new employee with an empty week
pub fn add(
    roster: &Roster,
    department: Department,
    name: &str,
    morning: f64,
    evening: f64,
) -> StoreOutcome {
    if name.trim().is_empty() {
        return StoreOutcome::Unchanged(Declined::EmptyName);
    }

    let data = roster.department(department);
    let id = fresh_id(data);
    let employee = Employee::new(id, name, PayRates::derive(morning, evening));

    tracing::info!(
        department = department.key(),
        employee_id = %employee.id,
        name = %employee.name,
        morning,
        evening,
        "Employee added"
    );

    let mut employees = data.employees.clone();
    employees.push(employee);
    StoreOutcome::Updated(roster.with_department(department, DepartmentData { employees }))
}

/// Replace name and rates; the week is kept and the total recomputed
pub fn edit(
    roster: &Roster,
    department: Department,
    id: &str,
    name: &str,
    morning: f64,
    evening: f64,
) -> StoreOutcome {
    if name.trim().is_empty() {
        return StoreOutcome::Unchanged(Declined::EmptyName);
    }

    update_employee(roster, department, id, |employee| Employee {
        name: name.to_string(),
        pay_rates: PayRates::derive(morning, evening),
        ..employee.clone()
    })
}

/// Set the shift worked on one day
pub fn set_shift(
    roster: &Roster,
    department: Department,
    id: &str,
    day: Weekday,
    shift: ShiftType,
) -> StoreOutcome {
    update_employee(roster, department, id, |employee| Employee {
        shifts: employee.shifts.with(day, shift),
        ..employee.clone()
    })
}

/// Set the advance for one day. Any amount is accepted as entered.
pub fn set_advance(
    roster: &Roster,
    department: Department,
    id: &str,
    day: Weekday,
    amount: f64,
) -> StoreOutcome {
    update_employee(roster, department, id, |employee| Employee {
        advances: employee.advances.with(day, amount),
        ..employee.clone()
    })
}

/// Add `step` to the advance for one day
pub fn increment_advance(
    roster: &Roster,
    department: Department,
    id: &str,
    day: Weekday,
    step: f64,
) -> StoreOutcome {
    update_employee(roster, department, id, |employee| {
        let current = *employee.advances.get(day);
        Employee {
            advances: employee.advances.with(day, current + step),
            ..employee.clone()
        }
    })
}

/// Drop an employee, keeping the order of the others
pub(crate) fn remove(roster: &Roster, department: Department, id: &str) -> StoreOutcome {
    let data = roster.department(department);
    if !data.contains(id) {
        return StoreOutcome::Unchanged(Declined::EmployeeNotFound(id.to_string()));
    }

    let employees = data
        .employees
        .iter()
        .filter(|e| e.id != id)
        .cloned()
        .collect();

    tracing::info!(department = department.key(), employee_id = %id, "Employee removed");
    StoreOutcome::Updated(roster.with_department(department, DepartmentData { employees }))
}

/// Reset every shift and advance of the department. Names, ids and rates stay.
pub(crate) fn clear_all(roster: &Roster, department: Department) -> StoreOutcome {
    let data = roster.department(department);
    let employees = data
        .employees
        .iter()
        .map(|employee| Employee {
            shifts: Week::default(),
            advances: Week::splat(0.0),
            total_pay: 0.0,
            ..employee.clone()
        })
        .collect();

    tracing::info!(
        department = department.key(),
        count = data.employees.len(),
        "Department week cleared"
    );
    StoreOutcome::Updated(roster.with_department(department, DepartmentData { employees }))
}

/// Replace one employee with `f(employee)` and refresh its total
fn update_employee(
    roster: &Roster,
    department: Department,
    id: &str,
    f: impl FnOnce(&Employee) -> Employee,
) -> StoreOutcome {
    let data = roster.department(department);
    let Some(index) = data.employees.iter().position(|e| e.id == id) else {
        tracing::debug!(department = department.key(), employee_id = %id, "Employee not found");
        return StoreOutcome::Unchanged(Declined::EmployeeNotFound(id.to_string()));
    };

    let mut employees = data.employees.clone();
    employees[index] = calculator::refresh(f(&data.employees[index]));
    StoreOutcome::Updated(roster.with_department(department, DepartmentData { employees }))
}

/// Timestamp-derived id not yet used in the department
fn fresh_id(data: &DepartmentData) -> String {
    loop {
        let id = snowflake_id().to_string();
        if !data.contains(&id) {
            return id;
        }
    }
}
