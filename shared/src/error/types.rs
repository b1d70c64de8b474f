//! Application error type

use super::codes::ErrorCode;
use crate::models::{UnknownDepartment, UnknownShiftType, UnknownWeekday};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending field, id, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Employee id not present in the department
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::EmployeeNotFound, format!("Employee {} not found", id))
            .with_detail("id", id)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

impl From<UnknownDepartment> for AppError {
    fn from(err: UnknownDepartment) -> Self {
        Self::with_message(ErrorCode::InvalidDepartment, err.to_string())
            .with_detail("value", err.0)
    }
}

impl From<UnknownWeekday> for AppError {
    fn from(err: UnknownWeekday) -> Self {
        Self::with_message(ErrorCode::InvalidWeekday, err.to_string()).with_detail("value", err.0)
    }
}

impl From<UnknownShiftType> for AppError {
    fn from(err: UnknownShiftType) -> Self {
        Self::with_message(ErrorCode::InvalidShiftType, err.to_string())
            .with_detail("value", err.0)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, err.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::ConfirmationNotFound);
        assert_eq!(err.message, "Confirmation not found or already used");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_employee_not_found_details() {
        let err = AppError::employee_not_found("42");
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.to_string(), "Employee 42 not found");
        assert_eq!(err.details.unwrap()["id"], "42");
    }

    #[test]
    fn test_validation_carries_message() {
        let err = AppError::validation("step must be a finite amount").with_detail("field", "step");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "step must be a finite amount");
        assert_eq!(err.details.unwrap()["field"], "step");
    }

    #[test]
    fn test_from_parse_errors() {
        let err: AppError = "friday".parse::<crate::models::Weekday>().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidWeekday);

        let err: AppError = "bar".parse::<crate::models::Department>().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidDepartment);
    }
}
