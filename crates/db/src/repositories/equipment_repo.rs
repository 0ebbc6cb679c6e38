//! Repository for the `equipment` table.

use sitetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};

const COLUMNS: &str =
    "id, task_id, name, equipment_type, availability, rental_cost_per_day, created_at, updated_at";

/// CRUD for task equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new equipment entry for a task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        input: &CreateEquipment,
    ) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment (task_id, name, equipment_type, availability,
                 rental_cost_per_day)
             VALUES ($1, $2, $3, COALESCE($4, TRUE), COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(task_id)
            .bind(&input.name)
            .bind(&input.equipment_type)
            .bind(input.availability)
            .bind(input.rental_cost_per_day)
            .fetch_one(pool)
            .await
    }

    /// Find an equipment entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all equipment for a task, oldest first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Equipment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM equipment WHERE task_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Update an equipment entry. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEquipment,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            "UPDATE equipment SET
                name = COALESCE($2, name),
                equipment_type = COALESCE($3, equipment_type),
                availability = COALESCE($4, availability),
                rental_cost_per_day = COALESCE($5, rental_cost_per_day),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.equipment_type)
            .bind(input.availability)
            .bind(input.rental_cost_per_day)
            .fetch_optional(pool)
            .await
    }

    /// Delete an equipment entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
