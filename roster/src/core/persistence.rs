//! Load / save of the roster blob
//!
//! The whole four-department roster is stored as one JSON document under a
//! single key. Loading runs every employee record through the migrator; a
//! record that cannot be used is skipped on its own. A blob that is not JSON,
//! or not shaped as departments of employee lists, is logged, copied aside
//! under `<key>.corrupt`, and replaced by an empty roster.

use crate::payroll::migrate;
use crate::storage::{KeyValueStore, StorageResult};
use serde_json::Value;
use shared::models::{Department, DepartmentData, Employee, Roster};
use shared::util::snowflake_id;
use std::collections::HashSet;
use thiserror::Error;

/// Suffix of the key holding an unreadable blob
pub const CORRUPT_SUFFIX: &str = ".corrupt";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Stored roster is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stored roster is not an object keyed by department")]
    NotAnObject,

    #[error("Department {0} has no employee list")]
    MissingEmployees(String),
}

impl From<LoadError> for shared::AppError {
    fn from(err: LoadError) -> Self {
        shared::AppError::with_message(shared::ErrorCode::StorageCorrupted, err.to_string())
    }
}

/// Parse and migrate a stored roster
pub fn decode_roster(json: &str) -> Result<Roster, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(sections) = value else {
        return Err(LoadError::NotAnObject);
    };

    let mut roster = Roster::default();
    for (key, section) in &sections {
        let Some(department) = Department::from_key(key) else {
            tracing::warn!(key = %key, "Ignoring unknown department in stored roster");
            continue;
        };

        let records = section
            .get("employees")
            .and_then(Value::as_array)
            .ok_or_else(|| LoadError::MissingEmployees(key.clone()))?;

        let employees = records
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match migrate(raw) {
                Ok(employee) => Some(employee),
                Err(e) => {
                    tracing::warn!(
                        department = %key,
                        index,
                        error = %e,
                        "Skipping unusable employee record"
                    );
                    None
                }
            })
            .collect();

        let employees = dedupe_ids(department, employees);
        roster = roster.with_department(department, DepartmentData { employees });
    }

    Ok(roster)
}

/// Give a fresh id to any record repeating an earlier id
fn dedupe_ids(department: Department, employees: Vec<Employee>) -> Vec<Employee> {
    let mut seen = HashSet::with_capacity(employees.len());
    employees
        .into_iter()
        .map(|mut employee| {
            if !seen.insert(employee.id.clone()) {
                let previous = std::mem::take(&mut employee.id);
                employee.id = loop {
                    let id = snowflake_id().to_string();
                    if !seen.contains(&id) {
                        break id;
                    }
                };
                seen.insert(employee.id.clone());
                tracing::warn!(
                    department = department.key(),
                    duplicate_id = %previous,
                    new_id = %employee.id,
                    "Duplicate employee id in stored roster, reassigned"
                );
            }
            employee
        })
        .collect()
}

/// Read the roster at start-up. Never fails: problems are logged and an
/// empty roster is returned.
pub fn load_roster<S: KeyValueStore>(store: &S, key: &str) -> Roster {
    let json = match store.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => {
            tracing::info!(key, "No stored roster, starting empty");
            return Roster::default();
        }
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to read stored roster, starting empty");
            return Roster::default();
        }
    };

    match decode_roster(&json) {
        Ok(roster) => {
            tracing::info!(key, headcount = roster.headcount(), "Roster loaded");
            roster
        }
        Err(e) => {
            tracing::error!(key, error = %e, "Error loading saved data, starting empty");
            quarantine(store, key, &json);
            Roster::default()
        }
    }
}

/// Write the whole roster under `key`
pub fn save_roster<S: KeyValueStore>(store: &S, key: &str, roster: &Roster) -> StorageResult<()> {
    let json = serde_json::to_string(roster)?;
    store.set(key, &json)?;
    tracing::debug!(key, bytes = json.len(), "Roster saved");
    Ok(())
}

/// Keep a copy of an unreadable blob before it gets overwritten
fn quarantine<S: KeyValueStore>(store: &S, key: &str, json: &str) {
    let corrupt_key = format!("{}{}", key, CORRUPT_SUFFIX);
    match store.set(&corrupt_key, json) {
        Ok(()) => tracing::warn!(key = %corrupt_key, "Unreadable roster copied aside"),
        Err(e) => tracing::error!(key = %corrupt_key, error = %e, "Failed to copy unreadable roster"),
    }
}
