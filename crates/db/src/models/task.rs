//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::status::TaskStatus;
use sitetrack_core::types::{DateOnly, DbId, Timestamp};
use sqlx::FromRow;

/// A task row from the `tasks` table.
///
/// `progress_percent` follows the same raise-only caching rule as the
/// project-level field, scoped to the task.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub progress_percent: i32,
    pub start_date: Option<DateOnly>,
    pub due_date: Option<DateOnly>,
    pub assigned_to_admin: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<DateOnly>,
    pub due_date: Option<DateOnly>,
    pub assigned_to_admin: DbId,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub start_date: Option<DateOnly>,
    pub due_date: Option<DateOnly>,
    pub assigned_to_admin: Option<DbId>,
}

/// Filter for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<DbId>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<DbId>,
}
