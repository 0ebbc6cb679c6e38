//! Handlers for task budget line items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitetrack_core::error::CoreError;
use sitetrack_core::types::DbId;
use sitetrack_db::models::budget::{Budget, CreateBudget, UpdateBudget};
use sitetrack_db::repositories::{BudgetRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoreError::Validation(
            "Budget amount must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/tasks/{task_id}/budgets
pub async fn create(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateBudget>,
) -> AppResult<(StatusCode, Json<ApiResponse<Budget>>)> {
    validate_amount(input.amount)?;
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let budget = BudgetRepo::create(&state.pool, task_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(budget, "Budget line item created")),
    ))
}

/// GET /api/v1/tasks/{task_id}/budgets
pub async fn list_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Budget>>>> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", task_id))?;

    let budgets = BudgetRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(ApiResponse::data(budgets)))
}

/// GET /api/v1/budgets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Budget>>> {
    let budget = BudgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Budget line item", id))?;
    Ok(Json(ApiResponse::data(budget)))
}

/// PUT /api/v1/budgets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudget>,
) -> AppResult<Json<ApiResponse<Budget>>> {
    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    let budget = BudgetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Budget line item", id))?;
    Ok(Json(ApiResponse::with_message(
        budget,
        "Budget line item updated",
    )))
}

/// DELETE /api/v1/budgets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = BudgetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Budget line item deleted")))
    } else {
        Err(AppError::not_found("Budget line item", id))
    }
}
