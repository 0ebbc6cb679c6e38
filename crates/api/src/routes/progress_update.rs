//! Route definitions for the `/progress-updates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress_update;
use crate::state::AppState;

/// Routes mounted at `/progress-updates`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /latest                  -> list_latest
/// GET    /timeline/project/{id}   -> project_timeline
/// GET    /timeline/task/{id}      -> task_timeline
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(progress_update::list).post(progress_update::create),
        )
        .route("/latest", get(progress_update::list_latest))
        .route(
            "/timeline/project/{id}",
            get(progress_update::project_timeline),
        )
        .route("/timeline/task/{id}", get(progress_update::task_timeline))
        .route(
            "/{id}",
            get(progress_update::get_by_id)
                .put(progress_update::update)
                .delete(progress_update::delete),
        )
}
