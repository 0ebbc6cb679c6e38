//! Route definitions for the `/documents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /stats   -> get_stats
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(document::list).post(document::create))
        .route("/stats", get(document::get_stats))
        .route(
            "/{id}",
            get(document::get_by_id)
                .put(document::update)
                .delete(document::delete),
        )
}
