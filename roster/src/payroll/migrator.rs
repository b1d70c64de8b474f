//! Employee record migration
//!
//! Stored records come in two shapes:
//!
//! | Shape | `payRates` | `acomptes` | Notes |
//! |-------|-----------|-----------|-------|
//! | current | required | required, six days | returned as stored |
//! | legacy | optional | optional, any days | may carry a singular `acompte` |
//!
//! Decoding first tries the current schema. If that fails every field is
//! read on its own: a field that is missing or has the wrong type takes its
//! default, the singular `acompte` is dropped and `totalPay` is recomputed.
//! A record without an id gets a fresh one. The output always decodes as
//! current, so migrating twice is the same as migrating once.

use super::calculator;
use serde::Deserialize;
use serde_json::{Map, Value};
use shared::models::{Employee, PayRates, ShiftType, Week};
use shared::util::snowflake_id;
use thiserror::Error;

/// Rates given to records stored before per-employee rates existed
pub const LEGACY_PAY_RATES: PayRates = PayRates {
    morning: 50.0,
    evening: 50.0,
    double: 100.0,
};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Employee record is not an object")]
    NotAnObject,
}

impl From<MigrationError> for shared::AppError {
    fn from(err: MigrationError) -> Self {
        shared::AppError::with_message(shared::ErrorCode::EmployeeRecordInvalid, err.to_string())
    }
}

/// Ids were once stored as raw timestamps
fn legacy_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn legacy_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Numbers, or numeric text as typed into an input field
fn legacy_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}

fn legacy_rates(value: &Value) -> PayRates {
    let Some(rates) = value.as_object() else {
        return LEGACY_PAY_RATES;
    };
    let morning = rates
        .get("morning")
        .and_then(legacy_amount)
        .unwrap_or(LEGACY_PAY_RATES.morning);
    let evening = rates
        .get("evening")
        .and_then(legacy_amount)
        .unwrap_or(LEGACY_PAY_RATES.evening);
    PayRates {
        morning,
        evening,
        double: rates
            .get("double")
            .and_then(legacy_amount)
            .unwrap_or(morning + evening),
    }
}

/// One value per day; missing days, and days that fail `read`, take `default`
fn legacy_week<T: Clone>(
    value: Option<&Value>,
    default: T,
    read: impl Fn(&Value) -> Option<T>,
) -> Week<T> {
    let days = value.and_then(Value::as_object);
    Week::from_fn(|day| {
        days.and_then(|days| days.get(day.key()))
            .and_then(&read)
            .unwrap_or_else(|| default.clone())
    })
}

/// Unknown shift strings count as no shift
fn legacy_shift(value: &Value) -> Option<ShiftType> {
    value.as_str().and_then(|s| s.parse().ok())
}

fn decode_legacy(record: &Map<String, Value>) -> Employee {
    let employee = Employee {
        id: record.get("id").and_then(legacy_id).unwrap_or_default(),
        name: record.get("name").map(legacy_name).unwrap_or_default(),
        pay_rates: record
            .get("payRates")
            .map(legacy_rates)
            .unwrap_or(LEGACY_PAY_RATES),
        shifts: legacy_week(record.get("shifts"), ShiftType::None, legacy_shift),
        advances: legacy_week(record.get("acomptes"), 0.0, legacy_amount),
        total_pay: 0.0,
    };
    calculator::refresh(employee)
}

/// Normalize one stored employee record into the current schema.
///
/// Only a record that is not a JSON object is rejected.
pub fn migrate(raw: &Value) -> Result<Employee, MigrationError> {
    let Value::Object(record) = raw else {
        return Err(MigrationError::NotAnObject);
    };

    let mut employee = match Employee::deserialize(raw) {
        Ok(employee) => employee,
        Err(strict_err) => {
            let employee = decode_legacy(record);
            tracing::debug!(
                employee_id = %employee.id,
                reason = %strict_err,
                "Migrated legacy employee record"
            );
            employee
        }
    };

    if employee.id.trim().is_empty() {
        employee.id = snowflake_id().to_string();
        tracing::warn!(employee_id = %employee.id, name = %employee.name, "Stored employee had no id, assigned one");
    }

    Ok(employee)
}
