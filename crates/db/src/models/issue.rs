//! Issue entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::status::IssueStatus;
use sitetrack_core::types::{DateOnly, DbId, Timestamp};
use sqlx::FromRow;

/// An issue row from the `issues` table, owned by a project.
///
/// Issues are created "open" and change status only through explicit
/// updates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Issue {
    pub id: DbId,
    pub project_id: DbId,
    pub submitted_by_user_id: Option<DbId>,
    pub description: String,
    pub status: String,
    pub date_reported: DateOnly,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new issue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIssue {
    pub project_id: DbId,
    pub submitted_by_user_id: Option<DbId>,
    pub description: String,
    /// Defaults to open if omitted.
    pub status: Option<IssueStatus>,
    /// Defaults to today if omitted.
    pub date_reported: Option<DateOnly>,
}

/// DTO for updating an existing issue. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIssue {
    pub description: Option<String>,
    pub status: Option<IssueStatus>,
    pub date_reported: Option<DateOnly>,
}

/// Filter for listing issues.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub project_id: Option<DbId>,
    pub status: Option<IssueStatus>,
    pub submitted_by: Option<DbId>,
}
