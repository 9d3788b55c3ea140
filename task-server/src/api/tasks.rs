//! Task CRUD endpoints
//!
//! The update handler works on the raw JSON object first: the access
//! policy must see the payload's key set before typed deserialization
//! can silently drop disallowed fields.

use axum::extract::{Extension, Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::error::{AppError, ErrorCode};
use shared::models::{TaskCreate, TaskDetail, TaskFilter, TaskUpdate};

use super::ApiResult;
use crate::auth::{CurrentUser, policy};
use crate::db;
use crate::state::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(filter): Query<TaskFilter>,
) -> ApiResult<Vec<TaskDetail>> {
    let tasks = db::tasks::list(&state.pool, policy::visible_owner(&user), &filter).await?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<TaskDetail> {
    // Missing tasks are 404 for everyone; the access check only applies
    // to tasks that exist
    let task = db::tasks::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound))?;
    policy::authorize_task_view(&user, &task)?;

    let detail = db::tasks::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound))?;

    Ok(Json(detail))
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(mut req): Json<TaskCreate>,
) -> Result<(StatusCode, Json<TaskDetail>), AppError> {
    policy::require_admin(&user)?;

    req.title = req.title.trim().to_string();
    if req.title.is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if let Some(description) = req.description.as_mut() {
        *description = description.trim().to_string();
    }

    if !db::employees::exists(&state.pool, req.employee_id).await? {
        return Err(AppError::new(ErrorCode::EmployeeRefInvalid));
    }

    let id = db::tasks::insert(&state.pool, &req).await?;
    let task = db::tasks::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound))?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<TaskDetail> {
    let mut task = db::tasks::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound))?;

    // The policy judges the raw key set, so unknown keys reject too
    let keys: Vec<&str> = body
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    policy::authorize_task_update(&user, &task, &keys)?;

    let mut update: TaskUpdate = serde_json::from_value(body).map_err(|e| {
        tracing::debug!("Task update payload rejected: {e}");
        AppError::new(ErrorCode::ValidationFailed)
    })?;

    if update.is_empty() {
        return Err(AppError::new(ErrorCode::NoFieldsToUpdate));
    }

    if let Some(title) = update.title.as_mut() {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        *title = trimmed.to_string();
    }
    // Reassignment must point at a real employee
    if let Some(employee_id) = update.employee_id {
        if !db::employees::exists(&state.pool, employee_id).await? {
            return Err(AppError::new(ErrorCode::EmployeeRefInvalid));
        }
    }

    update.apply(&mut task);
    db::tasks::update(&state.pool, &task).await?;

    let detail = db::tasks::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound))?;

    Ok(Json(detail))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    policy::require_admin(&user)?;

    if !db::tasks::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::TaskNotFound));
    }

    Ok(Json(serde_json::json!({
        "message": "Task deleted successfully"
    })))
}
