//! Roster session
//!
//! Holds the current snapshot, the active department tab and the pending
//! confirmations. Every accepted change replaces the snapshot and writes the
//! whole roster back to the store before returning.

use super::persistence::{load_roster, save_roster};
use crate::payroll::{
    ConfirmationToken, Confirmations, DepartmentSummary, PendingAction, StoreOutcome, store,
    summarize,
};
use crate::storage::KeyValueStore;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::intent::{IntentResult, RosterIntent};
use shared::models::{Department, Employee, Roster, ShiftType, Weekday};

pub struct Session<S: KeyValueStore> {
    store: S,
    key: String,
    roster: Roster,
    active: Department,
    confirmations: Confirmations,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the stored roster (or start empty) and open on the kitchen tab
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let roster = load_roster(&store, &key);
        Self {
            store,
            key,
            roster,
            active: Department::default(),
            confirmations: Confirmations::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn active_department(&self) -> Department {
        self.active
    }

    pub fn select_department(&mut self, department: Department) {
        if self.active != department {
            tracing::debug!(from = self.active.key(), to = department.key(), "Department selected");
            self.active = department;
        }
    }

    /// Employees of the active department, in insertion order
    pub fn employees(&self) -> &[Employee] {
        self.roster.employees(self.active)
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.roster.department(self.active).find(id)
    }

    pub fn summary(&self) -> DepartmentSummary {
        summarize(&self.roster, self.active)
    }

    // ==================== Operations ====================

    pub fn add_employee(&mut self, name: &str, morning: f64, evening: f64) -> AppResult<bool> {
        finite_amount("morning", morning)?;
        finite_amount("evening", evening)?;
        let outcome = store::add(&self.roster, self.active, name, morning, evening);
        self.commit(outcome)
    }

    pub fn edit_employee(
        &mut self,
        id: &str,
        name: &str,
        morning: f64,
        evening: f64,
    ) -> AppResult<bool> {
        finite_amount("morning", morning)?;
        finite_amount("evening", evening)?;
        let outcome = store::edit(&self.roster, self.active, id, name, morning, evening);
        self.commit(outcome)
    }

    pub fn set_shift(&mut self, id: &str, day: Weekday, shift: ShiftType) -> AppResult<bool> {
        let outcome = store::set_shift(&self.roster, self.active, id, day, shift);
        self.commit(outcome)
    }

    pub fn set_advance(&mut self, id: &str, day: Weekday, amount: f64) -> AppResult<bool> {
        finite_amount("amount", amount)?;
        let outcome = store::set_advance(&self.roster, self.active, id, day, amount);
        self.commit(outcome)
    }

    pub fn increment_advance(&mut self, id: &str, day: Weekday, step: f64) -> AppResult<bool> {
        finite_amount("step", step)?;
        let outcome = store::increment_advance(&self.roster, self.active, id, day, step);
        self.commit(outcome)
    }

    // ==================== Confirmation ====================

    /// Ask to delete an employee of the active department
    pub fn request_remove(&mut self, id: &str) -> ConfirmationToken {
        self.confirmations.request(PendingAction::RemoveEmployee {
            department: self.active,
            id: id.to_string(),
        })
    }

    /// Ask to empty every shift and advance of the active department
    pub fn request_clear_all(&mut self) -> ConfirmationToken {
        self.confirmations.request(PendingAction::ClearAll {
            department: self.active,
        })
    }

    pub fn pending(&self, token: &ConfirmationToken) -> Option<&PendingAction> {
        self.confirmations.get(token)
    }

    /// Run the action behind `token`. The action keeps the department it was
    /// requested on, even if another tab is active now.
    pub fn confirm(&mut self, token: &ConfirmationToken) -> AppResult<bool> {
        let action = self.confirmations.confirm(token).ok_or_else(|| {
            AppError::new(ErrorCode::ConfirmationNotFound).with_detail("token", token.as_str())
        })?;
        let outcome = action.apply(&self.roster);
        self.commit(outcome)
    }

    /// Drop the action behind `token`. Returns whether it was pending.
    pub fn cancel(&mut self, token: &ConfirmationToken) -> bool {
        self.confirmations.cancel(token)
    }

    // ==================== Intents ====================

    /// Run one front-end command
    pub fn dispatch(&mut self, intent: RosterIntent) -> AppResult<IntentResult> {
        tracing::debug!(intent = ?intent, "Dispatching intent");

        let result = match intent {
            RosterIntent::SelectDepartment { department } => {
                self.select_department(department);
                IntentResult::unchanged(format!("{} selected", department.label()))
            }
            RosterIntent::AddEmployee(dto) => {
                let changed = self.add_employee(&dto.name, dto.morning, dto.evening)?;
                match (changed, self.employees().last()) {
                    (true, Some(employee)) => {
                        IntentResult::changed(format!("Employee {} added", employee.id))
                    }
                    _ => IntentResult::unchanged("Employee name is empty"),
                }
            }
            RosterIntent::EditEmployee { id, data } => outcome_result(
                self.edit_employee(&id, &data.name, data.morning, data.evening)?,
                "Employee updated",
                &id,
            ),
            RosterIntent::SetShift { id, day, shift } => {
                outcome_result(self.set_shift(&id, day, shift)?, "Shift updated", &id)
            }
            RosterIntent::SetAdvance { id, day, amount } => {
                outcome_result(self.set_advance(&id, day, amount)?, "Advance updated", &id)
            }
            RosterIntent::IncrementAdvance { id, day, step } => outcome_result(
                self.increment_advance(&id, day, step)?,
                "Advance updated",
                &id,
            ),
            RosterIntent::RequestRemove { id } => {
                let token = self.request_remove(&id);
                pending_result(token, PendingAction::RemoveEmployee {
                    department: self.active,
                    id,
                })
            }
            RosterIntent::RequestClearAll => {
                let token = self.request_clear_all();
                pending_result(token, PendingAction::ClearAll {
                    department: self.active,
                })
            }
            RosterIntent::Confirm { token } => {
                if self.confirm(&ConfirmationToken::from(token))? {
                    IntentResult::changed("Confirmed")
                } else {
                    IntentResult::unchanged("Nothing to change")
                }
            }
            RosterIntent::Cancel { token } => {
                if self.cancel(&ConfirmationToken::from(token)) {
                    IntentResult::unchanged("Cancelled")
                } else {
                    return Err(AppError::new(ErrorCode::ConfirmationNotFound));
                }
            }
        };

        Ok(result)
    }

    /// Adopt an updated snapshot and persist it. A failed write leaves the
    /// new snapshot in memory and reports the error.
    fn commit(&mut self, outcome: StoreOutcome) -> AppResult<bool> {
        match outcome {
            StoreOutcome::Updated(roster) => {
                self.roster = roster;
                if let Err(e) = save_roster(&self.store, &self.key, &self.roster) {
                    tracing::error!(key = %self.key, error = %e, "Failed to save roster");
                    return Err(e.into());
                }
                Ok(true)
            }
            StoreOutcome::Unchanged(reason) => {
                tracing::debug!(department = self.active.key(), reason = %reason, "Operation declined");
                Ok(false)
            }
        }
    }
}

/// Amounts typed on the command line may parse as `NaN` or `inf`
fn finite_amount(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!("{} must be a finite amount", field))
            .with_detail("field", field));
    }
    Ok(())
}

fn outcome_result(changed: bool, message: &str, id: &str) -> IntentResult {
    if changed {
        IntentResult::changed(message)
    } else {
        IntentResult::unchanged(format!("Employee {} not changed", id))
    }
}

fn pending_result(token: ConfirmationToken, action: PendingAction) -> IntentResult {
    IntentResult::pending(token.to_string(), action.prompt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError, StorageResult};
    use shared::intent::EmployeeDto;

    const KEY: &str = "oneMealData";

    fn session() -> Session<MemoryStore> {
        Session::load(MemoryStore::new(), KEY)
    }

    fn stored(session: &Session<MemoryStore>) -> Roster {
        let json = session.store().get(KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_ali_scenario() {
        let mut s = session();
        s.select_department(Department::Shawarma);

        assert!(s.add_employee("Ali", 50.0, 70.0).unwrap());
        let ali = s.employees()[0].clone();
        assert_eq!(ali.pay_rates.double, 120.0);
        assert_eq!(ali.total_pay, 0.0);

        s.set_shift(&ali.id, Weekday::Saturday, ShiftType::Double).unwrap();
        assert_eq!(s.find_employee(&ali.id).unwrap().total_pay, 120.0);

        s.set_advance(&ali.id, Weekday::Saturday, 40.0).unwrap();
        assert_eq!(s.find_employee(&ali.id).unwrap().total_pay, 80.0);

        let token = s.request_remove(&ali.id);
        assert!(s.find_employee(&ali.id).is_some());
        assert!(s.confirm(&token).unwrap());
        assert!(s.find_employee(&ali.id).is_none());
        assert!(stored(&s).employees(Department::Shawarma).is_empty());
    }

    #[test]
    fn test_every_change_is_saved() {
        let mut s = session();
        s.add_employee("Nadia", 60.0, 60.0).unwrap();
        let id = s.employees()[0].id.clone();
        s.increment_advance(&id, Weekday::Monday, 100.0).unwrap();

        assert_eq!(&stored(&s), s.roster());
        assert_eq!(stored(&s).employees(Department::Kitchen)[0].total_pay, -100.0);
    }

    #[test]
    fn test_declined_operation_does_not_write() {
        let mut s = session();
        assert!(!s.add_employee("   ", 50.0, 50.0).unwrap());
        assert!(!s.set_shift("missing", Weekday::Sunday, ShiftType::Morning).unwrap());
        assert_eq!(s.store().get(KEY).unwrap(), None);
    }

    #[test]
    fn test_cancel_leaves_roster_untouched() {
        let mut s = session();
        s.add_employee("Karim", 50.0, 50.0).unwrap();
        let before = s.roster().clone();

        let token = s.request_clear_all();
        assert!(s.pending(&token).is_some());
        assert!(s.cancel(&token));
        assert_eq!(s.roster(), &before);

        // token is gone for good
        let err = s.confirm(&token).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfirmationNotFound);
    }

    #[test]
    fn test_confirm_applies_to_requesting_department() {
        let mut s = session();
        s.select_department(Department::Pizza);
        s.add_employee("Yacine", 50.0, 50.0).unwrap();
        let id = s.employees()[0].id.clone();
        s.set_shift(&id, Weekday::Tuesday, ShiftType::Evening).unwrap();

        let token = s.request_clear_all();
        s.select_department(Department::Kitchen);
        assert!(s.confirm(&token).unwrap());

        let yacine = &s.roster().employees(Department::Pizza)[0];
        assert_eq!(yacine.shifts.tuesday, ShiftType::None);
        assert_eq!(yacine.total_pay, 0.0);
    }

    #[test]
    fn test_reload_restores_state() {
        let store = MemoryStore::new();
        {
            let mut s = Session::load(store.clone(), KEY);
            s.select_department(Department::Servers);
            s.add_employee("Lina", 80.0, 90.0).unwrap();
        }

        let s = Session::load(store, KEY);
        assert_eq!(s.roster().employees(Department::Servers)[0].name, "Lina");
        assert_eq!(s.active_department(), Department::Kitchen);
    }

    #[test]
    fn test_dispatch_intents() {
        let mut s = session();

        let result = s
            .dispatch(RosterIntent::SelectDepartment {
                department: Department::Pizza,
            })
            .unwrap();
        assert!(!result.changed);
        assert_eq!(s.active_department(), Department::Pizza);

        let result = s
            .dispatch(RosterIntent::AddEmployee(EmployeeDto {
                name: "Omar".into(),
                morning: 50.0,
                evening: 50.0,
            }))
            .unwrap();
        assert!(result.changed);
        let id = s.employees()[0].id.clone();

        let result = s
            .dispatch(RosterIntent::IncrementAdvance {
                id: id.clone(),
                day: Weekday::Thursday,
                step: 100.0,
            })
            .unwrap();
        assert!(result.changed);
        assert_eq!(s.employees()[0].advances.thursday, 100.0);

        let result = s.dispatch(RosterIntent::RequestRemove { id }).unwrap();
        assert!(!result.changed);
        let token = result.token.unwrap();
        assert!(result.prompt.is_some());

        let result = s.dispatch(RosterIntent::Confirm { token }).unwrap();
        assert!(result.changed);
        assert!(s.employees().is_empty());
    }

    #[test]
    fn test_dispatch_unknown_token_is_error() {
        let mut s = session();
        let err = s
            .dispatch(RosterIntent::Cancel {
                token: "nope".into(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfirmationNotFound);
    }

    #[test]
    fn test_dispatch_empty_name_is_declined() {
        let mut s = session();
        let result = s
            .dispatch(RosterIntent::AddEmployee(EmployeeDto {
                name: "  ".into(),
                morning: 50.0,
                evening: 50.0,
            }))
            .unwrap();
        assert!(!result.changed);
        assert!(s.employees().is_empty());
        assert_eq!(s.store().get(KEY).unwrap(), None);
    }

    #[test]
    fn test_dispatch_non_finite_amount_is_error() {
        let mut s = session();
        let err = s
            .dispatch(RosterIntent::AddEmployee(EmployeeDto {
                name: "Ali".into(),
                morning: f64::INFINITY,
                evening: 50.0,
            }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap()["field"], "morning");
        assert!(s.employees().is_empty());
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let mut s = session();
        let err = s.add_employee("Ali", f64::NAN, 70.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(s.store().get(KEY).unwrap(), None);

        s.add_employee("Ali", 50.0, 70.0).unwrap();
        let id = s.employees()[0].id.clone();
        for err in [
            s.edit_employee(&id, "Ali", 50.0, f64::INFINITY).unwrap_err(),
            s.set_advance(&id, Weekday::Monday, f64::NAN).unwrap_err(),
            s.increment_advance(&id, Weekday::Monday, f64::NEG_INFINITY).unwrap_err(),
        ] {
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
        assert_eq!(s.employees()[0].pay_rates.evening, 70.0);
        assert_eq!(s.employees()[0].advances.monday, 0.0);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            let err = serde_json::from_str::<serde_json::Value>("read only").unwrap_err();
            Err(StorageError::Serialization(err))
        }
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut s = Session::load(ReadOnlyStore, KEY);
        let err = s.add_employee("Ali", 50.0, 70.0).unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        // the snapshot still moved forward
        assert_eq!(s.employees().len(), 1);
    }
}
