//! Employee Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Employee role
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Employee row as stored
///
/// Carries the password hash, so it is never serialized; API responses
/// use [`EmployeePublic`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 password hash (column kept as `password` for schema parity)
    pub password: String,
    pub role: Role,
    pub department: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Employee response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeePublic {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Employee> for EmployeePublic {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            role: e.role,
            department: e.department,
            created_at: e.created_at,
        }
    }
}

/// Create employee payload (admin endpoint)
///
/// The required strings default to empty so a missing key fails the
/// handler's validation (with the API's message) rather than body
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Defaults to `user` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Update employee payload (admin endpoint)
///
/// Only keys present in the payload are applied. `department` is a
/// nullable column, so it uses the double-Option encoding: an explicit
/// null clears it, an absent key leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub department: Option<Option<String>>,
}

impl EmployeeUpdate {
    /// True when no updatable field is present in the payload
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.department.is_none()
    }

    /// Merge present fields into an existing row
    pub fn apply(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(role) = self.role {
            employee.role = role;
        }
        if let Some(department) = &self.department {
            employee.department = department.clone();
        }
    }
}

/// Employee profile together with every task assigned to them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWithTasks {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub created_at: NaiveDateTime,
    pub tasks: Vec<Task>,
}

impl EmployeeWithTasks {
    pub fn new(employee: EmployeePublic, tasks: Vec<Task>) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            role: employee.role,
            department: employee.department,
            created_at: employee.created_at,
            tasks,
        }
    }
}
