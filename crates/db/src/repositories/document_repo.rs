//! Repository for the `documents` table.

use sitetrack_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document, UpdateDocument};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, file_name, file_type, file_url, uploaded_by_admin_id, \
     created_at, updated_at";

/// Provides CRUD and statistics queries for document metadata.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Register a new document, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, file_name, file_type, file_url,
                 uploaded_by_admin_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.project_id)
            .bind(&input.file_name)
            .bind(&input.file_type)
            .bind(&input.file_url)
            .bind(input.uploaded_by_admin_id)
            .fetch_one(pool)
            .await
    }

    /// Find a document by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List documents, optionally scoped to one project, newest first,
    /// paginated.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE ($1::uuid IS NULL OR project_id = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count documents, optionally scoped to one project.
    pub async fn count(pool: &PgPool, project_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE ($1::uuid IS NULL OR project_id = $1)",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }

    /// `(file_type, created_at)` pairs, optionally scoped to one project,
    /// in insertion order (breakdown stats input).
    pub async fn stats_rows(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<(String, Timestamp)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT file_type, created_at FROM documents
             WHERE ($1::uuid IS NULL OR project_id = $1)
             ORDER BY created_at ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Update document metadata. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                file_name = COALESCE($2, file_name),
                file_type = COALESCE($3, file_type),
                file_url = COALESCE($4, file_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&input.file_name)
            .bind(&input.file_type)
            .bind(&input.file_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
