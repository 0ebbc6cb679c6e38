//! HTTP-level tests for the progress update endpoints: validation, the
//! raise-only rollup round trip, and the milestone timeline.

mod common;

use axum::http::StatusCode;
use common::{assert_error_envelope, body_json, get, patch_json, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Creation and validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_progress_update_returns_201_envelope(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu1@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": project,
            "description": "Piling complete",
            "progress_percent": 25,
            "images": ["https://img.example.com/piling.jpg"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["progress_percent"], 25);
    assert_eq!(json["data"]["parent_kind"], "project");
    assert_eq!(json["data"]["images"][0], "https://img.example.com/piling.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_percent_returns_400(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu2@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": project,
            "description": "Too much",
            "progress_percent": 150
        }),
    )
    .await;

    let json = assert_error_envelope(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn both_parents_returns_400(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu3@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;
    let task = common::seed_task(&pool, project, admin, "Dredging").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": project,
            "task_id": task,
            "description": "Ambiguous",
            "progress_percent": 10
        }),
    )
    .await;

    assert_error_envelope(response, StatusCode::BAD_REQUEST).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_parent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": uuid::Uuid::new_v4(),
            "description": "Orphan",
            "progress_percent": 10
        }),
    )
    .await;

    let json = assert_error_envelope(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["error"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Rollup round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rollup_raises_parent_and_never_lowers_it(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu4@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    // First update raises the cache to 40.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": project,
            "description": "Quay walls",
            "progress_percent": 40
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{project}")).await).await;
    assert_eq!(json["data"]["progress_percent"], 40);

    // A lower follow-up leaves the cache untouched.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": project,
            "description": "Rework on the east quay",
            "progress_percent": 15
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project}")).await).await;
    assert_eq!(json["data"]["progress_percent"], 40);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn editing_an_update_reapplies_the_conditional_raise(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu5@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/progress-updates",
            serde_json::json!({
                "project_id": project,
                "description": "Initial",
                "progress_percent": 30
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // Raising the update to 70 raises the parent too.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/progress-updates/{id}"),
        serde_json::json!({"progress_percent": 70}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{project}")).await).await;
    assert_eq!(json["data"]["progress_percent"], 70);

    // Lowering it afterwards does not lower the parent.
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/progress-updates/{id}"),
        serde_json::json!({"progress_percent": 20}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project}")).await).await;
    assert_eq!(json["data"]["progress_percent"], 70);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manual_progress_patch_can_lower_the_cache(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu6@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/progress-updates",
        serde_json::json!({
            "project_id": project,
            "description": "Optimistic",
            "progress_percent": 90
        }),
    )
    .await;

    // The explicit override is allowed to move in either direction.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/projects/{project}/progress"),
        serde_json::json!({"progress_percent": 55}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project}")).await).await;
    assert_eq!(json["data"]["progress_percent"], 55);
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_timeline_annotates_changes_and_milestones(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu7@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    for (date, percent) in [("2025-04-01", 20), ("2025-04-10", 35), ("2025-04-20", 100)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/progress-updates",
            serde_json::json!({
                "project_id": project,
                "description": format!("at {percent}"),
                "progress_percent": percent,
                "date": date
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/progress-updates/timeline/project/{project}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["total_updates"], 3);

    let changes: Vec<i64> = data["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["progress_change"].as_i64().unwrap())
        .collect();
    assert_eq!(changes, [20, 15, 65]);

    // Every entry clears the jump threshold, so all three are milestones.
    assert_eq!(data["milestones"].as_array().unwrap().len(), 3);
    assert_eq!(data["timeline"][2]["is_milestone"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn timeline_for_missing_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/progress-updates/timeline/task/{}",
            uuid::Uuid::new_v4()
        ),
    )
    .await;
    assert_error_envelope(response, StatusCode::NOT_FOUND).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn latest_endpoint_returns_most_recent_first(pool: PgPool) {
    let admin = common::seed_admin(&pool, "pu8@example.com").await;
    let project = common::seed_project(&pool, admin, "Harbour").await;

    for (date, percent) in [("2025-01-01", 10), ("2025-02-01", 30)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/progress-updates",
            serde_json::json!({
                "project_id": project,
                "description": format!("at {percent}"),
                "progress_percent": percent,
                "date": date
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/progress-updates/latest?limit=1").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["progress_percent"], 30);
}
