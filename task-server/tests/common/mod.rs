//! Shared helpers for the HTTP integration tests
//!
//! Each test gets its own in-memory SQLite database with migrations
//! applied, and drives the real router through `tower::ServiceExt`.

#![allow(dead_code)]

use std::str::FromStr;

use axum::Router;
use axum::body::Body;
use http::Request;
use http_body_util::BodyExt;
use shared::models::Role;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use task_server::state::AppState;
use task_server::{api, auth, db, util};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "password123";

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

pub async fn test_app() -> TestApp {
    // A single connection keeps the in-memory database alive and shared
    // for the whole test
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory connect options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    let state = AppState {
        pool,
        jwt_secret: TEST_JWT_SECRET.to_string(),
    };

    TestApp {
        app: api::create_router(state.clone()),
        state,
    }
}

/// One admin and two regular users, all with [`TEST_PASSWORD`].
pub struct Fixtures {
    pub admin_id: i64,
    pub admin_token: String,
    pub user_id: i64,
    pub user_token: String,
    pub other_id: i64,
    pub other_token: String,
}

pub async fn seed_employees(app: &TestApp) -> Fixtures {
    let hash = util::hash_password(TEST_PASSWORD).expect("hash test password");

    let admin = db::employees::insert(
        &app.state.pool,
        "Ada Admin",
        "ada@company.com",
        &hash,
        Role::Admin,
        Some("Engineering"),
    )
    .await
    .expect("insert admin");
    let user = db::employees::insert(
        &app.state.pool,
        "Uma User",
        "uma@company.com",
        &hash,
        Role::User,
        Some("Marketing"),
    )
    .await
    .expect("insert user");
    let other = db::employees::insert(
        &app.state.pool,
        "Omar Other",
        "omar@company.com",
        &hash,
        Role::User,
        None,
    )
    .await
    .expect("insert other user");

    Fixtures {
        admin_id: admin.id,
        admin_token: auth::create_token(&admin, TEST_JWT_SECRET).expect("admin token"),
        user_id: user.id,
        user_token: auth::create_token(&user, TEST_JWT_SECRET).expect("user token"),
        other_id: other.id,
        other_token: auth::create_token(&other, TEST_JWT_SECRET).expect("other token"),
    }
}

/// Send one request through the router.
pub async fn request(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    app.app
        .clone()
        .oneshot(request)
        .await
        .expect("router oneshot")
}

pub async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() })
    })
}
