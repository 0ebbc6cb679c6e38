//! Handlers for the `/projects` resource, including the per-project
//! statistics snapshot and the manual progress override.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitetrack_core::progress::validate_progress_percent;
use sitetrack_core::stats::{self, BudgetTotals, IssueCounts, TaskBreakdown};
use sitetrack_core::status::{BudgetType, IssueStatus, ProjectStatus, TaskStatus};
use sitetrack_core::types::DbId;
use sitetrack_db::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use sitetrack_db::repositories::{AdminRepo, BudgetRepo, IssueRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub engineer_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ApiResponse<Project>>)> {
    if let Some(percent) = input.progress_percent {
        validate_progress_percent(percent)?;
    }
    AdminRepo::find_by_id(&state.pool, input.engineer_in_charge)
        .await?
        .ok_or_else(|| AppError::not_found("Admin", input.engineer_in_charge))?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(project, "Project created")),
    ))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<ProjectStatus>)
        .transpose()?;
    let filter = ProjectFilter {
        status,
        engineer_id: params.engineer_id,
    };

    let pagination = crate::query::PaginationParams {
        page: params.page,
        limit: params.limit,
    };
    let (page, limit, offset) = pagination.resolve();

    let count = ProjectRepo::count(&state.pool, &filter).await?;
    let projects = ProjectRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(ApiResponse::paginated(projects, count, page, limit)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(ApiResponse::data(project)))
}

/// GET /api/v1/projects/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let status: ProjectStatus = status.parse()?;
    let projects = ProjectRepo::list_by_status(&state.pool, status).await?;
    Ok(Json(ApiResponse::data(projects)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ApiResponse<Project>>> {
    if let Some(engineer_id) = input.engineer_in_charge {
        AdminRepo::find_by_id(&state.pool, engineer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin", engineer_id))?;
    }
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(ApiResponse::with_message(project, "Project updated")))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(ApiResponse::message("Project deleted")))
    } else {
        Err(AppError::not_found("Project", id))
    }
}

/// Request body for the manual progress override.
#[derive(Debug, Deserialize)]
pub struct SetProgressRequest {
    pub progress_percent: i32,
}

/// PATCH /api/v1/projects/{id}/progress
///
/// Explicitly sets the cached progress, bypassing the raise-only rollup.
/// This is the deliberate manual correction path; progress update writes
/// remain monotonic.
pub async fn set_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetProgressRequest>,
) -> AppResult<Json<ApiResponse<Project>>> {
    validate_progress_percent(input.progress_percent)?;

    let updated = ProjectRepo::set_progress(&state.pool, id, input.progress_percent).await?;
    if !updated {
        return Err(AppError::not_found("Project", id));
    }
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(ApiResponse::with_message(project, "Progress updated")))
}

/// Project identity echoed in the stats snapshot.
#[derive(Debug, Serialize)]
pub struct ProjectIdentity {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub progress_percent: i32,
}

/// Budget section of the stats snapshot: the project-level estimate plus
/// the aggregated line-item totals.
#[derive(Debug, Serialize)]
pub struct BudgetSummary {
    pub estimated: Option<f64>,
    #[serde(flatten)]
    pub totals: BudgetTotals,
}

/// The per-project statistics snapshot.
#[derive(Debug, Serialize)]
pub struct ProjectStats {
    pub project: ProjectIdentity,
    pub tasks: TaskBreakdown,
    pub budget: BudgetSummary,
    pub issues: IssueCounts,
}

/// GET /api/v1/projects/{id}/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ProjectStats>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;

    let task_statuses = TaskRepo::statuses_by_project(&state.pool, id)
        .await?
        .into_iter()
        .map(|s| s.parse::<TaskStatus>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::InternalError(format!("Stored task status rejected: {e}")))?;

    let budget_items = BudgetRepo::amounts_by_project(&state.pool, id)
        .await?
        .into_iter()
        .map(|(budget_type, amount)| Ok((budget_type.parse::<BudgetType>()?, amount)))
        .collect::<Result<Vec<_>, sitetrack_core::error::CoreError>>()
        .map_err(|e| AppError::InternalError(format!("Stored budget type rejected: {e}")))?;

    let issue_statuses = IssueRepo::statuses_by_project(&state.pool, id)
        .await?
        .into_iter()
        .map(|s| s.parse::<IssueStatus>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::InternalError(format!("Stored issue status rejected: {e}")))?;

    let snapshot = ProjectStats {
        project: ProjectIdentity {
            id: project.id,
            name: project.name,
            status: project.status,
            progress_percent: project.progress_percent,
        },
        tasks: stats::task_breakdown(task_statuses),
        budget: BudgetSummary {
            estimated: project.budget_estimate,
            totals: stats::budget_totals(budget_items),
        },
        issues: stats::issue_counts(issue_statuses),
    };
    Ok(Json(ApiResponse::data(snapshot)))
}
