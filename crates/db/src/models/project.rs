//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::status::ProjectStatus;
use sitetrack_core::types::{DateOnly, DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `progress_percent` is a denormalized rollup cache maintained by the
/// progress update path; it is raised, never lowered (see
/// `ProjectRepo::raise_progress`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub status: String,
    pub start_date: Option<DateOnly>,
    pub end_date: Option<DateOnly>,
    pub budget_estimate: Option<f64>,
    pub actual_cost: f64,
    pub currency: String,
    pub contractor_name: Option<String>,
    pub client_name: Option<String>,
    pub funding_source: Option<String>,
    pub engineer_in_charge: DbId,
    pub progress_percent: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub location_name: Option<String>,
    /// Defaults to planning if omitted.
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateOnly>,
    pub end_date: Option<DateOnly>,
    pub budget_estimate: Option<f64>,
    /// Defaults to 0.
    pub actual_cost: Option<f64>,
    /// Defaults to "KES".
    pub currency: Option<String>,
    pub contractor_name: Option<String>,
    pub client_name: Option<String>,
    pub funding_source: Option<String>,
    pub engineer_in_charge: DbId,
    /// Defaults to 0.
    pub progress_percent: Option<i32>,
    pub notes: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; only the
/// fields listed here can be changed (explicit allow-list).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateOnly>,
    pub end_date: Option<DateOnly>,
    pub budget_estimate: Option<f64>,
    pub actual_cost: Option<f64>,
    pub currency: Option<String>,
    pub contractor_name: Option<String>,
    pub client_name: Option<String>,
    pub funding_source: Option<String>,
    pub engineer_in_charge: Option<DbId>,
    pub notes: Option<String>,
}

/// Filter for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub engineer_id: Option<DbId>,
}
