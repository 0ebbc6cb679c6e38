//! Document metadata model and DTOs.
//!
//! Only metadata is tracked here; upload and storage mechanics live outside
//! this service.

use serde::{Deserialize, Serialize};
use sitetrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A document row from the `documents` table, owned by a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub uploaded_by_admin_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub project_id: DbId,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub uploaded_by_admin_id: DbId,
}

/// DTO for updating document metadata. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocument {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_url: Option<String>,
}
