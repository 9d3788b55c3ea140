//! Error codes for the task tracker
//!
//! Every code the API server can emit lives here, grouped by range:
//! - 0xxx: general
//! - 1xxx: authentication
//! - 2xxx: permission
//! - 3xxx: employee
//! - 4xxx: task
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Codes serialize as bare u16 values so non-Rust clients can match on
/// them without knowing the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Update payload contains no updatable fields
    NoFieldsToUpdate = 4,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,
    /// Non-admin may only change the status of their own task
    StatusUpdateOnly = 2003,

    // ==================== 3xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 3001,
    /// Employee email already registered
    EmailExists = 3002,
    /// Task payload references a nonexistent employee
    EmployeeRefInvalid = 3003,

    // ==================== 4xxx: Task ====================
    /// Task not found
    TaskNotFound = 4001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the client-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::NoFieldsToUpdate => "No fields to update",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Invalid or expired token",

            // Permission
            ErrorCode::PermissionDenied => "Access denied",
            ErrorCode::AdminRequired => "Admin access required",
            ErrorCode::StatusUpdateOnly => "You can only update task status",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmailExists => "Email already exists",
            ErrorCode::EmployeeRefInvalid => "Employee not found",

            // Task
            ErrorCode::TaskNotFound => "Task not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
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
            // General
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::NoFieldsToUpdate),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AdminRequired),
            2003 => Ok(ErrorCode::StatusUpdateOnly),

            // Employee
            3001 => Ok(ErrorCode::EmployeeNotFound),
            3002 => Ok(ErrorCode::EmailExists),
            3003 => Ok(ErrorCode::EmployeeRefInvalid),

            // Task
            4001 => Ok(ErrorCode::TaskNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NoFieldsToUpdate.code(), 4);

        // Auth
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::TokenExpired.code(), 1003);
        assert_eq!(ErrorCode::TokenInvalid.code(), 1004);

        // Permission
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::AdminRequired.code(), 2002);
        assert_eq!(ErrorCode::StatusUpdateOnly.code(), 2003);

        // Employee
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 3001);
        assert_eq!(ErrorCode::EmailExists.code(), 3002);
        assert_eq!(ErrorCode::EmployeeRefInvalid.code(), 3003);

        // Task
        assert_eq!(ErrorCode::TaskNotFound.code(), 4001);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(
            ErrorCode::InvalidCredentials.message(),
            "Invalid email or password"
        );
        assert_eq!(ErrorCode::PermissionDenied.message(), "Access denied");
        assert_eq!(
            ErrorCode::StatusUpdateOnly.message(),
            "You can only update task status"
        );
        assert_eq!(ErrorCode::EmailExists.message(), "Email already exists");
        assert_eq!(ErrorCode::NoFieldsToUpdate.message(), "No fields to update");
        assert_eq!(ErrorCode::TaskNotFound.message(), "Task not found");
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
        // EmployeeRefInvalid reuses the employee wording on purpose: the
        // client sent an employee_id that does not exist.
        assert_eq!(
            ErrorCode::EmployeeRefInvalid.message(),
            "Employee not found"
        );
    }

    #[test]
    fn test_try_from_round_trip() {
        let codes = [
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::NoFieldsToUpdate,
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::TokenExpired,
            ErrorCode::TokenInvalid,
            ErrorCode::PermissionDenied,
            ErrorCode::AdminRequired,
            ErrorCode::StatusUpdateOnly,
            ErrorCode::EmployeeNotFound,
            ErrorCode::EmailExists,
            ErrorCode::EmployeeRefInvalid,
            ErrorCode::TaskNotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(5001), Err(InvalidErrorCode(5001)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::TaskNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("2003").unwrap();
        assert_eq!(code, ErrorCode::StatusUpdateOnly);

        assert!(serde_json::from_str::<ErrorCode>("777").is_err());
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(format!("{}", ErrorCode::EmailExists), "3002");
    }
}
