//! Repository for the `tasks` table.

use sitetrack_core::status::TaskStatus;
use sitetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, TaskFilter, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, status, progress_percent, \
     start_date, due_date, assigned_to_admin, created_at, updated_at";

/// Provides CRUD and rollup operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, name, description, start_date, due_date,
                 assigned_to_admin)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.due_date)
            .bind(input.assigned_to_admin)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks matching the filter, ordered by due date, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &TaskFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE ($1::uuid IS NULL OR project_id = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::uuid IS NULL OR assigned_to_admin = $3)
             ORDER BY due_date ASC NULLS LAST
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(filter.project_id)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.assigned_to)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count tasks matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, filter: &TaskFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks
             WHERE ($1::uuid IS NULL OR project_id = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::uuid IS NULL OR assigned_to_admin = $3)",
        )
        .bind(filter.project_id)
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.assigned_to)
        .fetch_one(pool)
        .await
    }

    /// List all tasks belonging to a project, ordered by due date.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY due_date ASC NULLS LAST"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List tasks that are past their due date and not completed.
    pub async fn list_overdue(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE due_date < CURRENT_DATE AND status <> 'completed'
             ORDER BY due_date ASC"
        );
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Status strings for every task of a project (stats input).
    pub async fn statuses_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT status FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                start_date = COALESCE($5, start_date),
                due_date = COALESCE($6, due_date),
                assigned_to_admin = COALESCE($7, assigned_to_admin),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.start_date)
            .bind(input.due_date)
            .bind(input.assigned_to_admin)
            .fetch_optional(pool)
            .await
    }

    /// Set status and progress together (explicit task status update path).
    /// Returns `true` if a row was updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: TaskStatus,
        percent: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET status = $2, progress_percent = $3, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(percent)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Raise the cached progress if the submitted value exceeds it.
    ///
    /// Same single-statement compare-and-set as the project-level rollup.
    pub async fn raise_progress(
        pool: &PgPool,
        id: DbId,
        percent: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET progress_percent = $2, updated_at = NOW()
             WHERE id = $1 AND progress_percent < $2",
        )
        .bind(id)
        .bind(percent)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    ///
    /// Owned materials, equipment, labor and budgets cascade via FK;
    /// task-scoped progress updates are removed explicitly.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM progress_updates WHERE parent_kind = 'task' AND parent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
