//! Route definitions for the `/issues` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::issue;
use crate::state::AppState;

/// Routes mounted at `/issues`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /stats         -> get_stats
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PATCH  /{id}/status   -> set_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(issue::list).post(issue::create))
        .route("/stats", get(issue::get_stats))
        .route(
            "/{id}",
            get(issue::get_by_id)
                .put(issue::update)
                .delete(issue::delete),
        )
        .route("/{id}/status", patch(issue::set_status))
}
