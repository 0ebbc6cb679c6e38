//! Handlers for the `/progress-updates` resource: the rollup write path
//! and the timeline views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::progress::validate_progress_percent;
use sitetrack_core::status::ParentKind;
use sitetrack_core::timeline::{self, ProgressPoint, TimelineEntry};
use sitetrack_core::types::{DateOnly, DbId};
use sitetrack_db::models::progress_update::{
    NewProgressUpdate, ProgressUpdate, UpdateProgressUpdate,
};
use sitetrack_db::repositories::{ProgressUpdateRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for creating a progress update. Exactly one of
/// `project_id` / `task_id` identifies the parent.
#[derive(Debug, Deserialize)]
pub struct CreateProgressUpdateRequest {
    pub project_id: Option<DbId>,
    pub task_id: Option<DbId>,
    pub description: String,
    pub progress_percent: i32,
    pub images: Option<Vec<String>>,
    pub date: Option<DateOnly>,
}

/// Resolve the tagged parent from the two optional ID fields.
fn resolve_parent(
    project_id: Option<DbId>,
    task_id: Option<DbId>,
) -> Result<(ParentKind, DbId), CoreError> {
    match (project_id, task_id) {
        (Some(id), None) => Ok((ParentKind::Project, id)),
        (None, Some(id)) => Ok((ParentKind::Task, id)),
        _ => Err(CoreError::Validation(
            "Exactly one of project_id or task_id must be provided".to_string(),
        )),
    }
}

/// Verify the tagged parent row exists (there is no FK backing it).
async fn ensure_parent_exists(
    state: &AppState,
    kind: ParentKind,
    id: DbId,
) -> AppResult<()> {
    let exists = match kind {
        ParentKind::Project => ProjectRepo::find_by_id(&state.pool, id).await?.is_some(),
        ParentKind::Task => TaskRepo::find_by_id(&state.pool, id).await?.is_some(),
    };
    if exists {
        Ok(())
    } else {
        Err(match kind {
            ParentKind::Project => AppError::not_found("Project", id),
            ParentKind::Task => AppError::not_found("Task", id),
        })
    }
}

/// Conditionally raise the parent's cached progress. The comparison runs
/// inside a single UPDATE, so concurrent submissions converge on the
/// maximum percent ever submitted.
async fn raise_parent_progress(
    state: &AppState,
    kind: ParentKind,
    id: DbId,
    percent: i32,
) -> AppResult<bool> {
    let raised = match kind {
        ParentKind::Project => ProjectRepo::raise_progress(&state.pool, id, percent).await?,
        ParentKind::Task => TaskRepo::raise_progress(&state.pool, id, percent).await?,
    };
    Ok(raised)
}

/// POST /api/v1/progress-updates
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProgressUpdateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProgressUpdate>>)> {
    validate_progress_percent(input.progress_percent)?;
    let (parent_kind, parent_id) = resolve_parent(input.project_id, input.task_id)?;
    ensure_parent_exists(&state, parent_kind, parent_id).await?;

    let new_update = NewProgressUpdate {
        parent_kind,
        parent_id,
        description: input.description,
        progress_percent: input.progress_percent,
        images: input.images.unwrap_or_default(),
        date: input.date,
    };
    let update = ProgressUpdateRepo::create(&state.pool, &new_update).await?;

    let raised =
        raise_parent_progress(&state, parent_kind, parent_id, update.progress_percent).await?;
    tracing::debug!(
        parent_kind = %parent_kind,
        %parent_id,
        percent = update.progress_percent,
        raised,
        "Progress update recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(update, "Progress update created")),
    ))
}

/// Query parameters for `GET /progress-updates`.
#[derive(Debug, Deserialize)]
pub struct ProgressUpdateListParams {
    pub project_id: Option<DbId>,
    pub task_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/v1/progress-updates
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProgressUpdateListParams>,
) -> AppResult<Json<ApiResponse<Vec<ProgressUpdate>>>> {
    // Both filters at once is ambiguous; none at all means "everything".
    let parent = match (params.project_id, params.task_id) {
        (None, None) => None,
        (project_id, task_id) => Some(resolve_parent(project_id, task_id)?),
    };

    let pagination = crate::query::PaginationParams {
        page: params.page,
        limit: params.limit,
    };
    let (page, limit, offset) = pagination.resolve();

    let count = ProgressUpdateRepo::count(&state.pool, parent).await?;
    let updates = ProgressUpdateRepo::list(&state.pool, parent, limit, offset).await?;
    Ok(Json(ApiResponse::paginated(updates, count, page, limit)))
}

/// Query parameters for `GET /progress-updates/latest`.
#[derive(Debug, Deserialize)]
pub struct LatestParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/progress-updates/latest
pub async fn list_latest(
    State(state): State<AppState>,
    Query(params): Query<LatestParams>,
) -> AppResult<Json<ApiResponse<Vec<ProgressUpdate>>>> {
    let limit = params.limit.unwrap_or(5).clamp(1, 100);
    let updates = ProgressUpdateRepo::list_latest(&state.pool, limit).await?;
    Ok(Json(ApiResponse::data(updates)))
}

/// GET /api/v1/progress-updates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ProgressUpdate>>> {
    let update = ProgressUpdateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Progress update", id))?;
    Ok(Json(ApiResponse::data(update)))
}

/// PUT /api/v1/progress-updates/{id}
///
/// Allow-listed edit of an existing update. A raised percent re-applies
/// the conditional rollup; a lowered percent never retroactively lowers
/// the parent cache.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProgressUpdate>,
) -> AppResult<Json<ApiResponse<ProgressUpdate>>> {
    if let Some(percent) = input.progress_percent {
        validate_progress_percent(percent)?;
    }

    let updated = ProgressUpdateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Progress update", id))?;

    let parent_kind: ParentKind = updated
        .parent_kind
        .parse()
        .map_err(|e| AppError::InternalError(format!("Stored parent kind rejected: {e}")))?;
    raise_parent_progress(
        &state,
        parent_kind,
        updated.parent_id,
        updated.progress_percent,
    )
    .await?;

    Ok(Json(ApiResponse::with_message(
        updated,
        "Progress update updated",
    )))
}

/// DELETE /api/v1/progress-updates/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProgressUpdateRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Progress update deleted")))
    } else {
        Err(AppError::not_found("Progress update", id))
    }
}

/// The milestone-annotated timeline for one parent.
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub parent_kind: ParentKind,
    pub parent_id: DbId,
    pub timeline: Vec<TimelineEntry>,
    pub total_updates: usize,
    pub milestones: Vec<TimelineEntry>,
}

async fn build_timeline_response(
    state: &AppState,
    parent_kind: ParentKind,
    parent_id: DbId,
) -> AppResult<TimelineResponse> {
    ensure_parent_exists(state, parent_kind, parent_id).await?;

    let points: Vec<ProgressPoint> =
        ProgressUpdateRepo::list_for_timeline(&state.pool, parent_kind, parent_id)
            .await?
            .into_iter()
            .map(|row| ProgressPoint {
                id: row.id,
                date: row.date,
                description: row.description,
                progress_percent: row.progress_percent,
                images: row.images.0,
            })
            .collect();

    let entries = timeline::build_timeline(points);
    let milestones = timeline::milestones(&entries);
    Ok(TimelineResponse {
        parent_kind,
        parent_id,
        total_updates: entries.len(),
        timeline: entries,
        milestones,
    })
}

/// GET /api/v1/progress-updates/timeline/project/{id}
pub async fn project_timeline(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<TimelineResponse>>> {
    let response = build_timeline_response(&state, ParentKind::Project, id).await?;
    Ok(Json(ApiResponse::data(response)))
}

/// GET /api/v1/progress-updates/timeline/task/{id}
pub async fn task_timeline(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<TimelineResponse>>> {
    let response = build_timeline_response(&state, ParentKind::Task, id).await?;
    Ok(Json(ApiResponse::data(response)))
}
