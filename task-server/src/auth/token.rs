//! Employee JWT authentication

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, Role};

use crate::state::AppState;

/// JWT claims for an authenticated employee
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Employee ID (stringified)
    pub sub: String,
    /// Employee email
    pub email: String,
    /// Employee role
    pub role: Role,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated employee identity extracted from JWT
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

pub const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a JWT for an employee
pub fn create_token(
    employee: &Employee,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: employee.id.to_string(),
        email: employee.email.clone(),
        role: employee.role,
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decode and verify a bearer token into a [`CurrentUser`]
pub fn verify_token(token: &str, secret: &str) -> Result<CurrentUser, AppError> {
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::new(ErrorCode::TokenExpired)
            }
            _ => AppError::new(ErrorCode::TokenInvalid),
        }
    })?;

    let id = token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::new(ErrorCode::TokenInvalid))?;

    Ok(CurrentUser {
        id,
        email: token_data.claims.email,
        role: token_data.claims.role,
    })
}

/// Middleware that extracts and verifies the employee JWT from the
/// Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated).into_response())?;

    let user = verify_token(token, &state.jwt_secret).map_err(IntoResponse::into_response)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, role: Role) -> Employee {
        Employee {
            id,
            name: "Test".to_string(),
            email: "test@company.com".to_string(),
            password: "hash".to_string(),
            role,
            department: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_create_and_verify_round_trip() {
        let token = create_token(&employee(7, Role::Admin), "secret").unwrap();
        let user = verify_token(&token, "secret").unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.email, "test@company.com");
        assert!(user.role.is_admin());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(&employee(1, Role::User), "secret").unwrap();
        let err = verify_token(&token, "other-secret").unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: "1".to_string(),
            email: "test@company.com".to_string(),
            role: Role::User,
            // Well past the default validation leeway
            exp: (now - chrono::Duration::hours(2)).timestamp() as usize,
            iat: (now - chrono::Duration::hours(3)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let err = verify_token(&token, "secret").unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenExpired);
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "test@company.com".to_string(),
            role: Role::User,
            exp: (now + chrono::Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let err = verify_token(&token, "secret").unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }
}
