//! Shared types for the One Meal roster
//!
//! Data model, error codes and command intents used by the roster engine
//! and by any front end that drives it.

pub mod error;
pub mod intent;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use intent::{IntentResult, RosterIntent};
pub use models::{
    Department, DepartmentData, Employee, PayRates, Roster, ShiftType, Week, Weekday,
};
