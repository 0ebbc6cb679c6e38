//! Handlers for task labor entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitetrack_core::types::DbId;
use sitetrack_db::models::labor::{CreateLabor, Labor, UpdateLabor};
use sitetrack_db::repositories::{LaborRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/tasks/{task_id}/labor
pub async fn create(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateLabor>,
) -> AppResult<(StatusCode, Json<ApiResponse<Labor>>)> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let labor = LaborRepo::create(&state.pool, task_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(labor, "Labor entry created")),
    ))
}

/// GET /api/v1/tasks/{task_id}/labor
pub async fn list_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Labor>>>> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let labor = LaborRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(ApiResponse::data(labor)))
}

/// GET /api/v1/labor/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Labor>>> {
    let labor = LaborRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Labor entry", id))?;
    Ok(Json(ApiResponse::data(labor)))
}

/// PUT /api/v1/labor/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLabor>,
) -> AppResult<Json<ApiResponse<Labor>>> {
    let labor = LaborRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Labor entry", id))?;
    Ok(Json(ApiResponse::with_message(labor, "Labor entry updated")))
}

/// DELETE /api/v1/labor/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = LaborRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Labor entry deleted")))
    } else {
        Err(AppError::not_found("Labor entry", id))
    }
}
