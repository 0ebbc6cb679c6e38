//! Route definitions for the top-level `/budgets` resource.
//! List and create live under `/tasks/{task_id}/budgets`.

use axum::routing::get;
use axum::Router;

use crate::handlers::budget;
use crate::state::AppState;

/// Routes mounted at `/budgets`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(budget::get_by_id)
            .put(budget::update)
            .delete(budget::delete),
    )
}
