//! Handlers for task equipment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitetrack_core::types::DbId;
use sitetrack_db::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use sitetrack_db::repositories::{EquipmentRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/tasks/{task_id}/equipment
pub async fn create(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<ApiResponse<Equipment>>)> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let equipment = EquipmentRepo::create(&state.pool, task_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(equipment, "Equipment created")),
    ))
}

/// GET /api/v1/tasks/{task_id}/equipment
pub async fn list_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Equipment>>>> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let equipment = EquipmentRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(ApiResponse::data(equipment)))
}

/// GET /api/v1/equipment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Equipment>>> {
    let equipment = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment", id))?;
    Ok(Json(ApiResponse::data(equipment)))
}

/// PUT /api/v1/equipment/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEquipment>,
) -> AppResult<Json<ApiResponse<Equipment>>> {
    let equipment = EquipmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment", id))?;
    Ok(Json(ApiResponse::with_message(equipment, "Equipment updated")))
}

/// DELETE /api/v1/equipment/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = EquipmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Equipment deleted")))
    } else {
        Err(AppError::not_found("Equipment", id))
    }
}
