//! Login, registration and profile endpoints

use axum::extract::{Extension, State};
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{EmployeePublic, Role};

use super::ApiResult;
use crate::auth::{self, CurrentUser};
use crate::db;
use crate::state::AppState;
use crate::util;

/// Login credentials
///
/// Fields default to empty so missing keys fail validation with the
/// API's own message instead of a body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Self-registration payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub department: Option<String>,
}

/// Token plus profile, returned by login and register
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: EmployeePublic,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    let email = req.email.trim().to_lowercase();
    if !super::valid_email(&email) {
        return Err(AppError::validation("Valid email is required"));
    }
    if req.password.is_empty() {
        return Err(AppError::validation("Password is required"));
    }

    // Same error for unknown email and wrong password
    let employee = db::employees::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !util::verify_password(&req.password, &employee.password) {
        return Err(AppError::invalid_credentials());
    }

    let token = auth::create_token(&employee, &state.jwt_secret).map_err(super::internal)?;

    Ok(Json(AuthResponse {
        token,
        user: employee.into(),
    }))
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
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

    // Self-registration never grants admin
    let employee = db::employees::insert(
        &state.pool,
        name,
        &email,
        &hash,
        Role::User,
        req.department.as_deref().map(str::trim),
    )
    .await?;

    let token = auth::create_token(&employee, &state.jwt_secret).map_err(super::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: employee.into(),
        }),
    ))
}

/// Profile of the authenticated employee
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<EmployeePublic> {
    let employee = db::employees::find_by_id(&state.pool, user.id)
        .await?
        // The token can outlive the row it was issued for
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok(Json(employee.into()))
}
