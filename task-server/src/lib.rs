//! Employee task tracker API server
//!
//! Long-running service that:
//! - Authenticates employees with JWT bearer tokens (24h expiry)
//! - Applies the role/ownership access policy to every task operation
//! - Serves employee and task CRUD plus a dashboard aggregation endpoint
//!
//! All state lives in a single SQLite database; request handlers receive
//! an explicitly owned [`state::AppState`] rather than touching any
//! process-wide connection.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;
pub mod util;

// Re-export common types
pub use auth::CurrentUser;

/// Boxed error type used at startup boundaries
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
