//! Repository for the `projects` table.

use sitetrack_core::status::ProjectStatus;
use sitetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, location_name, status, start_date, end_date, \
     budget_estimate, actual_cost, currency, contractor_name, client_name, \
     funding_source, engineer_in_charge, progress_percent, notes, created_at, updated_at";

/// Provides CRUD and rollup operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, location_name, status, start_date,
                 end_date, budget_estimate, actual_cost, currency, contractor_name,
                 client_name, funding_source, engineer_in_charge, progress_percent, notes)
             VALUES ($1, $2, $3, COALESCE($4, 'planning'), $5, $6, $7, COALESCE($8, 0),
                 COALESCE($9, 'KES'), $10, $11, $12, $13, COALESCE($14, 0), $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location_name)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_estimate)
            .bind(input.actual_cost)
            .bind(&input.currency)
            .bind(&input.contractor_name)
            .bind(&input.client_name)
            .bind(&input.funding_source)
            .bind(input.engineer_in_charge)
            .bind(input.progress_percent)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching the filter, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::uuid IS NULL OR engineer_in_charge = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.engineer_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count projects matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::uuid IS NULL OR engineer_in_charge = $2)",
        )
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.engineer_id)
        .fetch_one(pool)
        .await
    }

    /// List all projects with the given status, newest first.
    pub async fn list_by_status(
        pool: &PgPool,
        status: ProjectStatus,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE status = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query)
            .bind(status.as_str())
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                location_name = COALESCE($4, location_name),
                status = COALESCE($5, status),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                budget_estimate = COALESCE($8, budget_estimate),
                actual_cost = COALESCE($9, actual_cost),
                currency = COALESCE($10, currency),
                contractor_name = COALESCE($11, contractor_name),
                client_name = COALESCE($12, client_name),
                funding_source = COALESCE($13, funding_source),
                engineer_in_charge = COALESCE($14, engineer_in_charge),
                notes = COALESCE($15, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location_name)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_estimate)
            .bind(input.actual_cost)
            .bind(&input.currency)
            .bind(&input.contractor_name)
            .bind(&input.client_name)
            .bind(&input.funding_source)
            .bind(input.engineer_in_charge)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Set the cached progress to an explicit value (manual override path).
    /// Returns `true` if a row was updated.
    pub async fn set_progress(pool: &PgPool, id: DbId, percent: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET progress_percent = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(percent)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Raise the cached progress if the submitted value exceeds it.
    ///
    /// The comparison happens inside the single UPDATE, so concurrent
    /// submissions always converge on the maximum value ever submitted.
    /// Returns `true` if the cache was raised.
    pub async fn raise_progress(
        pool: &PgPool,
        id: DbId,
        percent: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET progress_percent = $2, updated_at = NOW()
             WHERE id = $1 AND progress_percent < $2",
        )
        .bind(id)
        .bind(percent)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Owned tasks, documents and issues cascade via FK; progress updates
    /// have a tagged parent without an FK, so they are removed explicitly
    /// in the same transaction.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query(
            "DELETE FROM progress_updates WHERE parent_kind = 'project' AND parent_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        // Task-scoped updates of the cascaded tasks would otherwise be orphaned.
        sqlx::query(
            "DELETE FROM progress_updates WHERE parent_kind = 'task'
               AND parent_id IN (SELECT id FROM tasks WHERE project_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
