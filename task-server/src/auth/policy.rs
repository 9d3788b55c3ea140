//! Role and ownership access policy
//!
//! Every role/ownership decision lives here so the handlers stay free of
//! inline role comparisons. Admins see and touch everything; users are
//! limited to their own tasks, and may only change a task's status.

use shared::error::{AppError, ErrorCode};
use shared::models::Task;

use super::CurrentUser;

/// Owner filter for task queries and the dashboard.
///
/// `None` means unrestricted (admin); `Some(id)` restricts the visible
/// set to tasks assigned to that employee.
pub fn visible_owner(user: &CurrentUser) -> Option<i64> {
    if user.role.is_admin() {
        None
    } else {
        Some(user.id)
    }
}

/// Admin gate for task create/delete and all employee writes.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::AdminRequired))
    }
}

/// Post-fetch ownership check for reading a single task.
pub fn authorize_task_view(user: &CurrentUser, task: &Task) -> Result<(), AppError> {
    if user.role.is_admin() || task.employee_id == user.id {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::PermissionDenied))
    }
}

/// Ownership check for reading an employee's task list.
pub fn authorize_employee_tasks_view(user: &CurrentUser, employee_id: i64) -> Result<(), AppError> {
    if user.role.is_admin() || employee_id == user.id {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::PermissionDenied))
    }
}

/// Task update policy.
///
/// Admins may change anything. Non-admins must own the task, and the
/// whole payload is rejected if any key other than `status` is present;
/// a partial apply would let a disallowed payload half-succeed. The
/// ownership check runs first so a non-owner never learns which keys
/// would have been acceptable.
pub fn authorize_task_update(
    user: &CurrentUser,
    task: &Task,
    payload_keys: &[&str],
) -> Result<(), AppError> {
    if user.role.is_admin() {
        return Ok(());
    }
    if task.employee_id != user.id {
        return Err(AppError::new(ErrorCode::PermissionDenied));
    }
    if payload_keys.iter().any(|key| *key != "status") {
        return Err(AppError::new(ErrorCode::StatusUpdateOnly));
    }
    Ok(())
}
