//! Labor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A labor row from the `labor` table, owned by a task.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Labor {
    pub id: DbId,
    pub task_id: DbId,
    pub worker_name: String,
    pub worker_type: String,
    pub hourly_rate: f64,
    pub hours_worked: f64,
    pub total_cost: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new labor entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabor {
    pub worker_name: String,
    pub worker_type: String,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
    pub total_cost: Option<f64>,
    /// Defaults to "active" if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing labor entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLabor {
    pub worker_name: Option<String>,
    pub worker_type: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
    pub total_cost: Option<f64>,
    pub status: Option<String>,
}
