//! Route definitions for the top-level `/equipment` resource.
//! List and create live under `/tasks/{task_id}/equipment`.

use axum::routing::get;
use axum::Router;

use crate::handlers::equipment;
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(equipment::get_by_id)
            .put(equipment::update)
            .delete(equipment::delete),
    )
}
