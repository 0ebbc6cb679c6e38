//! Route definitions for the top-level `/materials` resource.
//! List and create live under `/tasks/{task_id}/materials`.

use axum::routing::get;
use axum::Router;

use crate::handlers::material;
use crate::state::AppState;

/// Routes mounted at `/materials`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(material::get_by_id)
            .put(material::update)
            .delete(material::delete),
    )
}
