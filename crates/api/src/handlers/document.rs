//! Handlers for the `/documents` resource and document breakdown
//! statistics. Only metadata is managed here; storage lives elsewhere.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sitetrack_core::stats::{self, BreakdownStats};
use sitetrack_core::types::DbId;
use sitetrack_db::models::document::{CreateDocument, Document, UpdateDocument};
use sitetrack_db::repositories::{AdminRepo, DocumentRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /documents`.
#[derive(Debug, Deserialize)]
pub struct DocumentListParams {
    pub project_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/v1/documents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> AppResult<(StatusCode, Json<ApiResponse<Document>>)> {
    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", input.project_id))?;
    AdminRepo::find_by_id(&state.pool, input.uploaded_by_admin_id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin", input.uploaded_by_admin_id))?;

    let document = DocumentRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(document, "Document registered")),
    ))
}

/// GET /api/v1/documents
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DocumentListParams>,
) -> AppResult<Json<ApiResponse<Vec<Document>>>> {
    let pagination = crate::query::PaginationParams {
        page: params.page,
        limit: params.limit,
    };
    let (page, limit, offset) = pagination.resolve();

    let count = DocumentRepo::count(&state.pool, params.project_id).await?;
    let documents = DocumentRepo::list(&state.pool, params.project_id, limit, offset).await?;
    Ok(Json(ApiResponse::paginated(documents, count, page, limit)))
}

/// GET /api/v1/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Document", id))?;
    Ok(Json(ApiResponse::data(document)))
}

/// PUT /api/v1/documents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let document = DocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Document", id))?;
    Ok(Json(ApiResponse::with_message(document, "Document updated")))
}

/// DELETE /api/v1/documents/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = DocumentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Document deleted")))
    } else {
        Err(AppError::not_found("Document", id))
    }
}

/// Query parameters for `GET /documents/stats`.
#[derive(Debug, Deserialize)]
pub struct DocumentStatsParams {
    pub project_id: Option<DbId>,
}

/// GET /api/v1/documents/stats
///
/// Counts per file type and per upload month, with the most common type
/// picked by count (first-encountered wins on ties).
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<DocumentStatsParams>,
) -> AppResult<Json<ApiResponse<BreakdownStats>>> {
    let rows = DocumentRepo::stats_rows(&state.pool, params.project_id).await?;
    let breakdown = stats::breakdown(
        rows.into_iter()
            .map(|(file_type, created_at)| (file_type, stats::month_key(created_at.date_naive()))),
    );
    Ok(Json(ApiResponse::data(breakdown)))
}
