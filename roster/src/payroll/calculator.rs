//! Net pay calculation
//!
//! Net pay = sum of the rate for each day's shift - sum of the day's
//! advances. The result may be negative when advances exceed earned pay;
//! it is not clamped. Computing never fails: see [`money::sum`].

use super::money;
use shared::models::{Employee, PayRates, ShiftType};

/// Rate earned for one day with the given shift
pub fn shift_rate(rates: &PayRates, shift: ShiftType) -> f64 {
    match shift {
        ShiftType::None => 0.0,
        ShiftType::Morning => rates.morning,
        ShiftType::Evening => rates.evening,
        ShiftType::Double => rates.double,
    }
}

fn day_rates(employee: &Employee) -> impl Iterator<Item = f64> + '_ {
    employee
        .shifts
        .iter()
        .map(|(_, shift)| shift_rate(&employee.pay_rates, *shift))
}

fn day_advances(employee: &Employee) -> impl Iterator<Item = f64> + '_ {
    employee.advances.iter().map(|(_, amount)| *amount)
}

/// Pay earned over the week, before advances
pub fn earned(employee: &Employee) -> f64 {
    money::sum(day_rates(employee))
}

/// Advances handed out over the week
pub fn advances(employee: &Employee) -> f64 {
    money::sum(day_advances(employee))
}

/// Net pay for the week
pub fn compute(employee: &Employee) -> f64 {
    money::sum(day_rates(employee).chain(day_advances(employee).map(|amount| -amount)))
}

/// Same record with `total_pay` brought in line with its shifts, advances and rates
pub fn refresh(mut employee: Employee) -> Employee {
    employee.total_pay = compute(&employee);
    employee
}
