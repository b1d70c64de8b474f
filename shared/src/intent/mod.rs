//! Roster intents - one serializable command per user action
//!
//! A front end emits a [`RosterIntent`] for every user action and the roster
//! session answers with an [`IntentResult`]. The JSON shape is
//!
//! ```json
//! { "action": "SetShift", "data": { "id": "1", "day": "saturday", "shift": "Doublé" } }
//! ```

pub mod dto;

use crate::models::{Department, ShiftType, Weekday};
use serde::{Deserialize, Serialize};

// Re-exports
pub use dto::*;

/// User action against the active department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum RosterIntent {
    /// Switch the active department tab
    SelectDepartment { department: Department },
    /// Append a new employee
    AddEmployee(EmployeeDto),
    /// Replace name and rates of an employee
    EditEmployee {
        id: String,
        #[serde(flatten)]
        data: EmployeeDto,
    },
    SetShift {
        id: String,
        day: Weekday,
        shift: ShiftType,
    },
    SetAdvance {
        id: String,
        day: Weekday,
        amount: f64,
    },
    /// "+100" shortcut on an advance field
    IncrementAdvance {
        id: String,
        day: Weekday,
        #[serde(default = "dto::default_advance_step")]
        step: f64,
    },
    /// Ask to delete an employee; answered with a confirmation token
    RequestRemove { id: String },
    /// Ask to empty every cell of the department; answered with a confirmation token
    RequestClearAll,
    /// Carry out a pending destructive action
    Confirm { token: String },
    /// Drop a pending destructive action
    Cancel { token: String },
}

/// Outcome of dispatching an intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Whether the roster snapshot was replaced
    pub changed: bool,
    /// Short description of what happened
    pub message: String,
    /// Confirmation token, present when the intent needs confirmation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Question to show the user together with the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl IntentResult {
    /// The snapshot was replaced
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            changed: true,
            message: message.into(),
            token: None,
            prompt: None,
        }
    }

    /// Nothing changed (declined input, unknown id, cancelled action)
    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: message.into(),
            token: None,
            prompt: None,
        }
    }

    /// A destructive action is waiting for confirmation
    pub fn pending(token: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: "Confirmation required".to_string(),
            token: Some(token.into()),
            prompt: Some(prompt.into()),
        }
    }
}
