//! Shared types for the task tracker
//!
//! Common types used by the API server and its tooling: error codes and
//! the [`error::AppError`] response type, plus the employee/task/dashboard
//! data models.

pub mod error;
pub mod models;

// Re-exports
pub use http;
