//! Shared helpers for API integration tests: router construction that
//! mirrors production, request shorthands, and database fixtures.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sitetrack_api::config::ServerConfig;
use sitetrack_api::router::build_app_router;
use sitetrack_api::state::AppState;
use sitetrack_core::types::DbId;
use sitetrack_db::models::admin::CreateAdmin;
use sitetrack_db::models::project::CreateProject;
use sitetrack_db::models::task::CreateTask;
use sitetrack_db::repositories::{AdminRepo, ProjectRepo, TaskRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to the same [`build_app_router`] the binary uses, so tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request shorthands
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PATCH", uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(app: Router, method: &str, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard error envelope shape and return the body.
pub async fn assert_error_envelope(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
    json
}

// ---------------------------------------------------------------------------
// Database fixtures
// ---------------------------------------------------------------------------

/// Insert an admin row to satisfy engineer/assignee foreign keys.
pub async fn seed_admin(pool: &PgPool, email: &str) -> DbId {
    AdminRepo::create(
        pool,
        &CreateAdmin {
            name: "Test Engineer".to_string(),
            email: email.to_string(),
            role: None,
            phone: None,
        },
    )
    .await
    .unwrap()
    .id
}

/// Insert a project owned by the given engineer.
pub async fn seed_project(pool: &PgPool, engineer_id: DbId, name: &str) -> DbId {
    ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
            description: None,
            location_name: None,
            status: None,
            start_date: None,
            end_date: None,
            budget_estimate: None,
            actual_cost: None,
            currency: None,
            contractor_name: None,
            client_name: None,
            funding_source: None,
            engineer_in_charge: engineer_id,
            progress_percent: None,
            notes: None,
        },
    )
    .await
    .unwrap()
    .id
}

/// Insert a task under the given project and assignee.
pub async fn seed_task(pool: &PgPool, project_id: DbId, admin_id: DbId, name: &str) -> DbId {
    TaskRepo::create(
        pool,
        &CreateTask {
            project_id,
            name: name.to_string(),
            description: None,
            start_date: None,
            due_date: None,
            assigned_to_admin: admin_id,
        },
    )
    .await
    .unwrap()
    .id
}
