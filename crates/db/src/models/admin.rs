//! Admin (staff) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An admin row from the `admins` table. Referenced as project engineer,
/// task assignee, and document uploader.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new admin.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    /// Defaults to "engineer" if omitted.
    pub role: Option<String>,
    pub phone: Option<String>,
}
