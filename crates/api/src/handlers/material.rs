//! Handlers for task materials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitetrack_core::types::DbId;
use sitetrack_db::models::material::{CreateMaterial, Material, UpdateMaterial};
use sitetrack_db::repositories::{MaterialRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/tasks/{task_id}/materials
pub async fn create(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<ApiResponse<Material>>)> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let material = MaterialRepo::create(&state.pool, task_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(material, "Material created")),
    ))
}

/// GET /api/v1/tasks/{task_id}/materials
pub async fn list_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Material>>>> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let materials = MaterialRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(ApiResponse::data(materials)))
}

/// GET /api/v1/materials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Material>>> {
    let material = MaterialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Material", id))?;
    Ok(Json(ApiResponse::data(material)))
}

/// PUT /api/v1/materials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaterial>,
) -> AppResult<Json<ApiResponse<Material>>> {
    let material = MaterialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Material", id))?;
    Ok(Json(ApiResponse::with_message(material, "Material updated")))
}

/// DELETE /api/v1/materials/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = MaterialRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Material deleted")))
    } else {
        Err(AppError::not_found("Material", id))
    }
}
