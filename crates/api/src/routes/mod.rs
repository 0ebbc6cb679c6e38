pub mod budget;
pub mod document;
pub mod equipment;
pub mod health;
pub mod issue;
pub mod labor;
pub mod material;
pub mod progress_update;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                list, create
/// /projects/{id}                           get, update, delete
/// /projects/{id}/stats                     statistics snapshot
/// /projects/{id}/progress                  manual progress set (PATCH)
/// /projects/status/{status}                list by status
///
/// /tasks                                   list, create
/// /tasks/overdue                           overdue tasks
/// /tasks/{id}                              get, update, delete
/// /tasks/{id}/status                       status + progress set (PATCH)
/// /tasks/{id}/materials                    list, create
/// /tasks/{id}/equipment                    list, create
/// /tasks/{id}/labor                        list, create
/// /tasks/{id}/budgets                      list, create
///
/// /materials/{id}                          get, update, delete
/// /equipment/{id}                          get, update, delete
/// /labor/{id}                              get, update, delete
/// /budgets/{id}                            get, update, delete
///
/// /progress-updates                        list, create
/// /progress-updates/latest                 most recent updates
/// /progress-updates/{id}                   get, update, delete
/// /progress-updates/timeline/project/{id}  project timeline
/// /progress-updates/timeline/task/{id}     task timeline
///
/// /issues                                  list, create
/// /issues/stats                            breakdown statistics
/// /issues/{id}                             get, update, delete
/// /issues/{id}/status                      status set (PATCH)
///
/// /documents                               list, create
/// /documents/stats                         breakdown statistics
/// /documents/{id}                          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/materials", material::router())
        .nest("/equipment", equipment::router())
        .nest("/labor", labor::router())
        .nest("/budgets", budget::router())
        .nest("/progress-updates", progress_update::router())
        .nest("/issues", issue::router())
        .nest("/documents", document::router())
}
