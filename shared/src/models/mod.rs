//! Data models
//!
//! Shared between the API server and clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod dashboard;
pub mod employee;
pub mod task;

// Re-exports
pub use dashboard::*;
pub use employee::*;
pub use task::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "key absent" from "key: null".
///
/// Used with `#[serde(default, deserialize_with = "double_option")]` on
/// `Option<Option<T>>` fields: `None` means the key was absent, `Some(None)`
/// means the key was present with an explicit null (clear the column),
/// `Some(Some(v))` means the key carried a value.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
