//! Database query layer
//!
//! One free function per query, all taking the shared [`sqlx::SqlitePool`].
//! Functions return `sqlx::Error`; handlers convert that into the API
//! error type at the boundary. Row-level access decisions never live
//! here; callers pass the owner filter from the access policy.

pub mod dashboard;
pub mod employees;
pub mod tasks;
