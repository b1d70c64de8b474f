//! Error codes
//!
//! Organized by category:
//! - 0xxx: General errors
//! - 8xxx: Employee / roster errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare u16 so front ends in any language can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 8xxx: Employee ====================
    /// Employee not found in the department
    EmployeeNotFound = 8001,
    /// Day is not one of the six working days
    InvalidWeekday = 8003,
    /// Unknown shift type
    InvalidShiftType = 8004,
    /// Unknown department
    InvalidDepartment = 8005,
    /// Stored employee record could not be migrated
    EmployeeRecordInvalid = 8006,

    // ==================== 81xx: Confirmation ====================
    /// Confirmation token unknown or already used
    ConfirmationNotFound = 8101,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Storage corrupted (data file damaged)
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",

            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::InvalidWeekday => "Day must be one of Saturday to Thursday",
            ErrorCode::InvalidShiftType => "Unknown shift type",
            ErrorCode::InvalidDepartment => "Unknown department",
            ErrorCode::EmployeeRecordInvalid => "Stored employee record is invalid",

            ErrorCode::ConfirmationNotFound => "Confirmation not found or already used",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::StorageCorrupted => "Storage corrupted (data file damaged)",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),

            8001 => Ok(ErrorCode::EmployeeNotFound),
            8003 => Ok(ErrorCode::InvalidWeekday),
            8004 => Ok(ErrorCode::InvalidShiftType),
            8005 => Ok(ErrorCode::InvalidDepartment),
            8006 => Ok(ErrorCode::EmployeeRecordInvalid),
            8101 => Ok(ErrorCode::ConfirmationNotFound),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
