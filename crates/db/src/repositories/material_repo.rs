//! Repository for the `materials` table.

use sitetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::material::{CreateMaterial, Material, UpdateMaterial};

const COLUMNS: &str =
    "id, task_id, name, unit, unit_cost, quantity_required, quantity_used, created_at, updated_at";

/// CRUD for task materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a new material for a task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        input: &CreateMaterial,
    ) -> Result<Material, sqlx::Error> {
        let query = format!(
            "INSERT INTO materials (task_id, name, unit, unit_cost, quantity_required,
                 quantity_used)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(task_id)
            .bind(&input.name)
            .bind(&input.unit)
            .bind(input.unit_cost)
            .bind(input.quantity_required)
            .bind(input.quantity_used)
            .fetch_one(pool)
            .await
    }

    /// Find a material by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials WHERE id = $1");
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all materials for a task, oldest first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Material>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM materials WHERE task_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Material>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Update a material. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaterial,
    ) -> Result<Option<Material>, sqlx::Error> {
        let query = format!(
            "UPDATE materials SET
                name = COALESCE($2, name),
                unit = COALESCE($3, unit),
                unit_cost = COALESCE($4, unit_cost),
                quantity_required = COALESCE($5, quantity_required),
                quantity_used = COALESCE($6, quantity_used),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.unit)
            .bind(input.unit_cost)
            .bind(input.quantity_required)
            .bind(input.quantity_used)
            .fetch_optional(pool)
            .await
    }

    /// Delete a material by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
