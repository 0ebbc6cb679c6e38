//! Repository for the `issues` table.

use sitetrack_core::status::IssueStatus;
use sitetrack_core::types::{DateOnly, DbId};
use sqlx::PgPool;

use crate::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, submitted_by_user_id, description, status, \
     date_reported, created_at, updated_at";

/// Provides CRUD and statistics queries for issues.
pub struct IssueRepo;

impl IssueRepo {
    /// Insert a new issue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIssue) -> Result<Issue, sqlx::Error> {
        let query = format!(
            "INSERT INTO issues (project_id, submitted_by_user_id, description, status,
                 date_reported)
             VALUES ($1, $2, $3, COALESCE($4, 'open'), COALESCE($5, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(input.project_id)
            .bind(input.submitted_by_user_id)
            .bind(&input.description)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.date_reported)
            .fetch_one(pool)
            .await
    }

    /// Find an issue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issues WHERE id = $1");
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List issues matching the filter, most recently reported first,
    /// paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &IssueFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM issues
             WHERE ($1::uuid IS NULL OR project_id = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::uuid IS NULL OR submitted_by_user_id = $3)
             ORDER BY date_reported DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(filter.project_id)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.submitted_by)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count issues matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, filter: &IssueFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM issues
             WHERE ($1::uuid IS NULL OR project_id = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::uuid IS NULL OR submitted_by_user_id = $3)",
        )
        .bind(filter.project_id)
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.submitted_by)
        .fetch_one(pool)
        .await
    }

    /// Status strings for every issue of a project (project stats input).
    pub async fn statuses_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT status FROM issues WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// `(status, date_reported)` pairs, optionally scoped to one project,
    /// in insertion order (breakdown stats input).
    pub async fn stats_rows(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<(String, DateOnly)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT status, date_reported FROM issues
             WHERE ($1::uuid IS NULL OR project_id = $1)
             ORDER BY created_at ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Update an issue. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIssue,
    ) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!(
            "UPDATE issues SET
                description = COALESCE($2, description),
                status = COALESCE($3, status),
                date_reported = COALESCE($4, date_reported),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.date_reported)
            .fetch_optional(pool)
            .await
    }

    /// Set an issue's status. Returns `true` if a row was updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: IssueStatus,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE issues SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status.as_str())
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an issue by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
