//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sitetrack_core::progress::validate_progress_percent;
use sitetrack_core::status::TaskStatus;
use sitetrack_core::types::DbId;
use sitetrack_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use sitetrack_db::repositories::{AdminRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    pub project_id: Option<DbId>,
    pub status: Option<String>,
    pub assigned_to: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<ApiResponse<Task>>)> {
    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", input.project_id))?;
    AdminRepo::find_by_id(&state.pool, input.assigned_to_admin)
        .await?
        .ok_or_else(|| AppError::not_found("Admin", input.assigned_to_admin))?;

    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(task, "Task created")),
    ))
}

/// GET /api/v1/tasks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<ApiResponse<Vec<Task>>>> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()?;
    let filter = TaskFilter {
        project_id: params.project_id,
        status,
        assigned_to: params.assigned_to,
    };

    let pagination = crate::query::PaginationParams {
        page: params.page,
        limit: params.limit,
    };
    let (page, limit, offset) = pagination.resolve();

    let count = TaskRepo::count(&state.pool, &filter).await?;
    let tasks = TaskRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(ApiResponse::paginated(tasks, count, page, limit)))
}

/// GET /api/v1/tasks/overdue
pub async fn list_overdue(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Task>>>> {
    let tasks = TaskRepo::list_overdue(&state.pool).await?;
    Ok(Json(ApiResponse::data(tasks)))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(ApiResponse::data(task)))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<ApiResponse<Task>>> {
    if let Some(admin_id) = input.assigned_to_admin {
        AdminRepo::find_by_id(&state.pool, admin_id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin", admin_id))?;
    }
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(ApiResponse::with_message(task, "Task updated")))
}

/// Request body for `PATCH /tasks/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetTaskStatusRequest {
    pub status: String,
    pub progress_percent: Option<i32>,
}

/// PATCH /api/v1/tasks/{id}/status
///
/// Sets the task status, optionally updating the cached progress in the
/// same statement. The progress is set explicitly here (not raise-only);
/// this mirrors the manual override on projects.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetTaskStatusRequest>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let status: TaskStatus = input.status.parse()?;

    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;

    let percent = input.progress_percent.unwrap_or(task.progress_percent);
    validate_progress_percent(percent)?;

    TaskRepo::set_status(&state.pool, id, status, percent).await?;
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    Ok(Json(ApiResponse::with_message(task, "Task status updated")))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Task deleted")))
    } else {
        Err(AppError::not_found("Task", id))
    }
}
