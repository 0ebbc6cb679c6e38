//! Route definitions for the top-level `/labor` resource.
//! List and create live under `/tasks/{task_id}/labor`.

use axum::routing::get;
use axum::Router;

use crate::handlers::labor;
use crate::state::AppState;

/// Routes mounted at `/labor`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(labor::get_by_id)
            .put(labor::update)
            .delete(labor::delete),
    )
}
