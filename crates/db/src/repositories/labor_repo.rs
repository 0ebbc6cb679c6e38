//! Repository for the `labor` table.

use sitetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::labor::{CreateLabor, Labor, UpdateLabor};

const COLUMNS: &str = "id, task_id, worker_name, worker_type, hourly_rate, hours_worked, \
     total_cost, status, created_at, updated_at";

/// CRUD for task labor entries.
pub struct LaborRepo;

impl LaborRepo {
    /// Insert a new labor entry for a task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        input: &CreateLabor,
    ) -> Result<Labor, sqlx::Error> {
        let query = format!(
            "INSERT INTO labor (task_id, worker_name, worker_type, hourly_rate, hours_worked,
                 total_cost, status)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), COALESCE($6, 0),
                 COALESCE($7, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Labor>(&query)
            .bind(task_id)
            .bind(&input.worker_name)
            .bind(&input.worker_type)
            .bind(input.hourly_rate)
            .bind(input.hours_worked)
            .bind(input.total_cost)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a labor entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Labor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labor WHERE id = $1");
        sqlx::query_as::<_, Labor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all labor entries for a task, oldest first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Labor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM labor WHERE task_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Labor>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Update a labor entry. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLabor,
    ) -> Result<Option<Labor>, sqlx::Error> {
        let query = format!(
            "UPDATE labor SET
                worker_name = COALESCE($2, worker_name),
                worker_type = COALESCE($3, worker_type),
                hourly_rate = COALESCE($4, hourly_rate),
                hours_worked = COALESCE($5, hours_worked),
                total_cost = COALESCE($6, total_cost),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Labor>(&query)
            .bind(id)
            .bind(&input.worker_name)
            .bind(&input.worker_type)
            .bind(input.hourly_rate)
            .bind(input.hours_worked)
            .bind(input.total_cost)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a labor entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
