//! Health check and service metadata endpoints

use axum::Json;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Server is running",
    }))
}

/// Service metadata at the root path
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Employee Task Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "employees": "/api/employees",
            "tasks": "/api/tasks",
            "dashboard": "/api/dashboard",
        },
    }))
}
