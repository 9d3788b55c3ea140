//! Employee CRUD endpoints
//!
//! Reads are open to any authenticated employee; writes go through the
//! admin gate in the access policy.

use axum::extract::{Extension, Path, State};
use axum::{Json, http::StatusCode};
use shared::error::{AppError, ErrorCode};
use shared::models::{EmployeeCreate, EmployeePublic, EmployeeUpdate, EmployeeWithTasks};

use super::ApiResult;
use crate::auth::{CurrentUser, policy};
use crate::db;
use crate::state::AppState;
use crate::util;

pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<EmployeePublic>> {
    let employees = db::employees::list(&state.pool).await?;
    Ok(Json(employees))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<EmployeePublic> {
    let employee = db::employees::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    Ok(Json(employee.into()))
}

/// Employee profile plus every task assigned to them.
pub async fn employee_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<EmployeeWithTasks> {
    // Checked before the fetch so non-admins cannot probe which ids exist
    policy::authorize_employee_tasks_view(&user, id)?;

    let employee = db::employees::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    let tasks = db::tasks::list_for_employee(&state.pool, id).await?;

    Ok(Json(EmployeeWithTasks::new(employee.into(), tasks)))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<EmployeePublic>), AppError> {
    policy::require_admin(&user)?;

    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    let email = req.email.trim().to_lowercase();
    if !super::valid_email(&email) {
        return Err(AppError::validation("Valid email is required"));
    }
    if req.password.len() < 6 {
        return Err(AppError::validation(
            "Password must be at least 6 characters",
        ));
    }

    if db::employees::email_taken(&state.pool, &email, None).await? {
        return Err(AppError::new(ErrorCode::EmailExists));
    }

    let hash = util::hash_password(&req.password).map_err(super::internal)?;
    let employee = db::employees::insert(
        &state.pool,
        name,
        &email,
        &hash,
        req.role.unwrap_or_default(),
        req.department.as_deref().map(str::trim),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(mut req): Json<EmployeeUpdate>,
) -> ApiResult<EmployeePublic> {
    policy::require_admin(&user)?;

    let mut employee = db::employees::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    if req.is_empty() {
        return Err(AppError::new(ErrorCode::NoFieldsToUpdate));
    }

    if let Some(name) = req.name.as_mut() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        *name = trimmed.to_string();
    }
    if let Some(email) = req.email.as_mut() {
        *email = email.trim().to_lowercase();
        if !super::valid_email(email) {
            return Err(AppError::validation("Valid email is required"));
        }
        if db::employees::email_taken(&state.pool, email, Some(id)).await? {
            return Err(AppError::new(ErrorCode::EmailExists));
        }
    }
    if let Some(Some(department)) = req.department.as_mut() {
        *department = department.trim().to_string();
    }

    req.apply(&mut employee);
    db::employees::update(&state.pool, &employee).await?;

    Ok(Json(employee.into()))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    policy::require_admin(&user)?;

    // Owned tasks disappear with the employee (ON DELETE CASCADE)
    if !db::employees::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }

    Ok(Json(serde_json::json!({
        "message": "Employee deleted successfully"
    })))
}
