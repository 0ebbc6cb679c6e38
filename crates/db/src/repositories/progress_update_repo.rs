//! Repository for the `progress_updates` table.

use sitetrack_core::status::ParentKind;
use sitetrack_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::progress_update::{NewProgressUpdate, ProgressUpdate, UpdateProgressUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_kind, parent_id, description, progress_percent, images, \
     date, created_at, updated_at";

/// Provides CRUD and timeline queries for progress updates.
pub struct ProgressUpdateRepo;

impl ProgressUpdateRepo {
    /// Insert a new progress update, returning the created row.
    ///
    /// The caller is responsible for having verified the tagged parent
    /// exists; there is no FK backing `parent_id`.
    pub async fn create(
        pool: &PgPool,
        input: &NewProgressUpdate,
    ) -> Result<ProgressUpdate, sqlx::Error> {
        let query = format!(
            "INSERT INTO progress_updates (parent_kind, parent_id, description,
                 progress_percent, images, date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressUpdate>(&query)
            .bind(input.parent_kind.as_str())
            .bind(input.parent_id)
            .bind(&input.description)
            .bind(input.progress_percent)
            .bind(Json(&input.images))
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find a progress update by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProgressUpdate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM progress_updates WHERE id = $1");
        sqlx::query_as::<_, ProgressUpdate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List updates, optionally scoped to one parent, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        parent: Option<(ParentKind, DbId)>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProgressUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress_updates
             WHERE ($1::text IS NULL OR (parent_kind = $1 AND parent_id = $2))
             ORDER BY date DESC, created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, ProgressUpdate>(&query)
            .bind(parent.map(|(kind, _)| kind.as_str()))
            .bind(parent.map(|(_, id)| id))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count updates, optionally scoped to one parent.
    pub async fn count(
        pool: &PgPool,
        parent: Option<(ParentKind, DbId)>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM progress_updates
             WHERE ($1::text IS NULL OR (parent_kind = $1 AND parent_id = $2))",
        )
        .bind(parent.map(|(kind, _)| kind.as_str()))
        .bind(parent.map(|(_, id)| id))
        .fetch_one(pool)
        .await
    }

    /// The most recent updates across all parents.
    pub async fn list_latest(pool: &PgPool, limit: i64) -> Result<Vec<ProgressUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress_updates
             ORDER BY date DESC, created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, ProgressUpdate>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All updates for one parent in chronological order (timeline input).
    pub async fn list_for_timeline(
        pool: &PgPool,
        parent_kind: ParentKind,
        parent_id: DbId,
    ) -> Result<Vec<ProgressUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress_updates
             WHERE parent_kind = $1 AND parent_id = $2
             ORDER BY date ASC, created_at ASC"
        );
        sqlx::query_as::<_, ProgressUpdate>(&query)
            .bind(parent_kind.as_str())
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Update an existing progress update. Only non-`None` fields are
    /// applied; the parent reference is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgressUpdate,
    ) -> Result<Option<ProgressUpdate>, sqlx::Error> {
        let query = format!(
            "UPDATE progress_updates SET
                description = COALESCE($2, description),
                progress_percent = COALESCE($3, progress_percent),
                images = COALESCE($4, images),
                date = COALESCE($5, date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressUpdate>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.progress_percent)
            .bind(input.images.as_ref().map(Json))
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a progress update by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM progress_updates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
