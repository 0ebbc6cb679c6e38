//! Progress update model and DTOs.
//!
//! A single entity covers both project-scoped and task-scoped updates via
//! a tagged parent reference (`parent_kind` + `parent_id`), so the rollup
//! engine has exactly one write path.

use serde::{Deserialize, Serialize};
use sitetrack_core::status::ParentKind;
use sitetrack_core::types::{DateOnly, DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A progress update row from the `progress_updates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressUpdate {
    pub id: DbId,
    pub parent_kind: String,
    pub parent_id: DbId,
    pub description: String,
    pub progress_percent: i32,
    /// Ordered list of image URLs.
    pub images: Json<Vec<String>>,
    pub date: DateOnly,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload after the handler has resolved the tagged parent.
#[derive(Debug, Clone)]
pub struct NewProgressUpdate {
    pub parent_kind: ParentKind,
    pub parent_id: DbId,
    pub description: String,
    pub progress_percent: i32,
    pub images: Vec<String>,
    /// Defaults to today if omitted.
    pub date: Option<DateOnly>,
}

/// DTO for updating an existing progress update. All fields are optional;
/// the parent reference is immutable once created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProgressUpdate {
    pub description: Option<String>,
    pub progress_percent: Option<i32>,
    pub images: Option<Vec<String>>,
    pub date: Option<DateOnly>,
}
