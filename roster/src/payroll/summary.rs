//! Weekly grid for one department

use super::{calculator, money};
use shared::models::{Department, PayRates, Roster, ShiftType, Week};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    pub shift: ShiftType,
    pub advance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub id: String,
    pub name: String,
    pub pay_rates: PayRates,
    pub days: Week<DayCell>,
    pub total_pay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub department: Department,
    pub rows: Vec<EmployeeRow>,
    /// Sum of every row's net pay
    pub net_total: f64,
}

impl DepartmentSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the grid; totals are computed fresh from each record
pub fn summarize(roster: &Roster, department: Department) -> DepartmentSummary {
    let rows: Vec<EmployeeRow> = roster
        .employees(department)
        .iter()
        .map(|employee| EmployeeRow {
            id: employee.id.clone(),
            name: employee.name.clone(),
            pay_rates: employee.pay_rates,
            days: Week::from_fn(|day| DayCell {
                shift: *employee.shifts.get(day),
                advance: *employee.advances.get(day),
            }),
            total_pay: calculator::compute(employee),
        })
        .collect();

    let net_total = money::sum(rows.iter().map(|row| row.total_pay));

    DepartmentSummary {
        department,
        rows,
        net_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payroll::store;
    use shared::models::Weekday;

    #[test]
    fn test_summary_rows_and_total() {
        let dept = Department::Shawarma;
        let roster = store::add(&Roster::default(), dept, "Ali", 50.0, 70.0)
            .into_roster()
            .unwrap();
        let roster = store::add(&roster, dept, "Sara", 60.0, 60.0)
            .into_roster()
            .unwrap();
        let ali = roster.employees(dept)[0].id.clone();
        let sara = roster.employees(dept)[1].id.clone();
        let roster = store::set_shift(&roster, dept, &ali, Weekday::Saturday, ShiftType::Double)
            .into_roster()
            .unwrap();
        let roster = store::set_advance(&roster, dept, &sara, Weekday::Sunday, 25.0)
            .into_roster()
            .unwrap();

        let summary = summarize(&roster, dept);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].days.saturday.shift, ShiftType::Double);
        assert_eq!(summary.rows[1].days.sunday.advance, 25.0);
        assert_eq!(summary.rows[0].total_pay, 120.0);
        assert_eq!(summary.rows[1].total_pay, -25.0);
        assert_eq!(summary.net_total, 95.0);
    }

    #[test]
    fn test_net_total_beyond_decimal_range() {
        let dept = Department::Pizza;
        let mut roster = Roster::default();
        for name in ["A", "B"] {
            roster = store::add(&roster, dept, name, 5e28, 0.0)
                .into_roster()
                .unwrap();
            let id = roster.employees(dept).last().unwrap().id.clone();
            roster = store::set_shift(&roster, dept, &id, Weekday::Monday, ShiftType::Morning)
                .into_roster()
                .unwrap();
        }

        let summary = summarize(&roster, dept);
        assert_eq!(summary.rows[0].total_pay, 5e28);
        assert_eq!(summary.net_total, 5e28 * 2.0);
    }

    #[test]
    fn test_empty_department() {
        let summary = summarize(&Roster::default(), Department::Pizza);
        assert!(summary.is_empty());
        assert_eq!(summary.net_total, 0.0);
    }
}
