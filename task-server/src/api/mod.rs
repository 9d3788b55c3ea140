//! API routes for the task server

pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod tasks;

use axum::routing::get;
use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use shared::error::{AppError, ErrorCode};

use crate::auth::auth_middleware;
use crate::state::AppState;

/// Handler result: a JSON body or an API error
pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Internal error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Light email plausibility check (local part, domain with a dot);
/// full RFC validation is not the goal.
fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Login, registration and liveness (no auth)
    let public = Router::new()
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        .route("/api/auth/login", axum::routing::post(auth::login))
        .route("/api/auth/register", axum::routing::post(auth::register));

    // Everything else requires a bearer token
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/api/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route("/api/employees/{id}/tasks", get(employees::employee_tasks))
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(not_found)
        // ========== Tower HTTP Middleware ==========
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request logging
        .layer(TraceLayer::new_for_http())
        // Request ID - unique ID per request, propagated to the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::with_message(ErrorCode::NotFound, "Route not found")
}
