//! Route definitions for the `/tasks` resource.
//!
//! Also nests task-owned materials, equipment, labor, and budget line
//! items under `/tasks/{task_id}/...`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{budget, equipment, labor, material, task};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /overdue                 -> list_overdue
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// PATCH  /{id}/status             -> set_status
///
/// GET    /{id}/materials          -> list_by_task
/// POST   /{id}/materials          -> create
/// GET    /{id}/equipment          -> list_by_task
/// POST   /{id}/equipment          -> create
/// GET    /{id}/labor              -> list_by_task
/// POST   /{id}/labor              -> create
/// GET    /{id}/budgets            -> list_by_task
/// POST   /{id}/budgets            -> create
/// ```
///
/// The matcher requires one parameter name per position, so the nested
/// resource routes reuse `{id}` for the owning task.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/overdue", get(task::list_overdue))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/status", patch(task::set_status))
        .route(
            "/{id}/materials",
            get(material::list_by_task).post(material::create),
        )
        .route(
            "/{id}/equipment",
            get(equipment::list_by_task).post(equipment::create),
        )
        .route(
            "/{id}/labor",
            get(labor::list_by_task).post(labor::create),
        )
        .route(
            "/{id}/budgets",
            get(budget::list_by_task).post(budget::create),
        )
}
