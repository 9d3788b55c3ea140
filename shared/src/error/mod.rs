//! Unified error system for the task tracker
//!
//! Everything an endpoint can fail with goes through this module:
//! - [`ErrorCode`]: numeric code for every known failure
//! - [`ErrorCategory`]: groups codes by domain
//! - [`AppError`]: the error type handlers return
//! - [`ErrorResponse`]: the `{"error": "..."}` body clients see
//!
//! # Code ranges
//!
//! - 0xxx: general
//! - 1xxx: authentication
//! - 2xxx: permission
//! - 3xxx: employee
//! - 4xxx: task
//! - 9xxx: system
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::TaskNotFound);
//!
//! // Override the default message when the caller knows better
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Valid email is required");
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
