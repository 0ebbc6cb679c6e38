//! Material entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A material row from the `materials` table, owned by a task.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Material {
    pub id: DbId,
    pub task_id: DbId,
    pub name: String,
    pub unit: String,
    pub unit_cost: f64,
    pub quantity_required: f64,
    pub quantity_used: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new material.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterial {
    pub name: String,
    pub unit: String,
    pub unit_cost: Option<f64>,
    pub quantity_required: Option<f64>,
    pub quantity_used: Option<f64>,
}

/// DTO for updating an existing material. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMaterial {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub unit_cost: Option<f64>,
    pub quantity_required: Option<f64>,
    pub quantity_used: Option<f64>,
}
