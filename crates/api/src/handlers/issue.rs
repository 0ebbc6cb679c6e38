//! Handlers for the `/issues` resource and issue breakdown statistics.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitetrack_core::stats::{self, rate_percent, BreakdownStats};
use sitetrack_core::status::IssueStatus;
use sitetrack_core::types::DbId;
use sitetrack_db::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};
use sitetrack_db::repositories::{IssueRepo, ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /issues`.
#[derive(Debug, Deserialize)]
pub struct IssueListParams {
    pub project_id: Option<DbId>,
    pub status: Option<String>,
    pub submitted_by: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/v1/issues
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateIssue>,
) -> AppResult<(StatusCode, Json<ApiResponse<Issue>>)> {
    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", input.project_id))?;
    if let Some(user_id) = input.submitted_by_user_id {
        UserRepo::find_by_id(&state.pool, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User", user_id))?;
    }

    let issue = IssueRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(issue, "Issue created")),
    ))
}

/// GET /api/v1/issues
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IssueListParams>,
) -> AppResult<Json<ApiResponse<Vec<Issue>>>> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<IssueStatus>)
        .transpose()?;
    let filter = IssueFilter {
        project_id: params.project_id,
        status,
        submitted_by: params.submitted_by,
    };

    let pagination = crate::query::PaginationParams {
        page: params.page,
        limit: params.limit,
    };
    let (page, limit, offset) = pagination.resolve();

    let count = IssueRepo::count(&state.pool, &filter).await?;
    let issues = IssueRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(ApiResponse::paginated(issues, count, page, limit)))
}

/// GET /api/v1/issues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Issue>>> {
    let issue = IssueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Issue", id))?;
    Ok(Json(ApiResponse::data(issue)))
}

/// PUT /api/v1/issues/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIssue>,
) -> AppResult<Json<ApiResponse<Issue>>> {
    let issue = IssueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Issue", id))?;
    Ok(Json(ApiResponse::with_message(issue, "Issue updated")))
}

/// Request body for `PATCH /issues/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetIssueStatusRequest {
    pub status: String,
}

/// PATCH /api/v1/issues/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetIssueStatusRequest>,
) -> AppResult<Json<ApiResponse<Issue>>> {
    let status: IssueStatus = input.status.parse()?;

    let updated = IssueRepo::set_status(&state.pool, id, status).await?;
    if !updated {
        return Err(AppError::not_found("Issue", id));
    }
    let issue = IssueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Issue", id))?;
    Ok(Json(ApiResponse::with_message(issue, "Issue status updated")))
}

/// DELETE /api/v1/issues/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = IssueRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Issue deleted")))
    } else {
        Err(AppError::not_found("Issue", id))
    }
}

/// Query parameters for `GET /issues/stats`.
#[derive(Debug, Deserialize)]
pub struct IssueStatsParams {
    pub project_id: Option<DbId>,
}

/// Issue breakdown statistics: the shared categorical/monthly breakdown
/// plus resolution counters.
#[derive(Debug, Serialize)]
pub struct IssueStats {
    #[serde(flatten)]
    pub breakdown: BreakdownStats,
    pub open_issues: i64,
    pub resolved_issues: i64,
    pub resolution_rate: i64,
}

/// GET /api/v1/issues/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<IssueStatsParams>,
) -> AppResult<Json<ApiResponse<IssueStats>>> {
    let rows = IssueRepo::stats_rows(&state.pool, params.project_id).await?;

    let open_issues = rows.iter().filter(|(s, _)| s == "open").count() as i64;
    let resolved_issues = rows.iter().filter(|(s, _)| s == "resolved").count() as i64;

    let breakdown = stats::breakdown(
        rows.into_iter()
            .map(|(status, date)| (status, stats::month_key(date))),
    );
    let resolution_rate = rate_percent(resolved_issues, breakdown.total);

    Ok(Json(ApiResponse::data(IssueStats {
        breakdown,
        open_issues,
        resolved_issues,
        resolution_rate,
    })))
}
