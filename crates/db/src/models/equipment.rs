//! Equipment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An equipment row from the `equipment` table, owned by a task.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub task_id: DbId,
    pub name: String,
    pub equipment_type: String,
    pub availability: bool,
    pub rental_cost_per_day: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new equipment entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
    pub equipment_type: String,
    pub availability: Option<bool>,
    pub rental_cost_per_day: Option<f64>,
}

/// DTO for updating an existing equipment entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub availability: Option<bool>,
    pub rental_cost_per_day: Option<f64>,
}
