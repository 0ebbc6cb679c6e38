//! Repository for the `budgets` table.

use sitetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::{Budget, CreateBudget, UpdateBudget};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, category, amount, budget_type, entry_type, quantity, \
     calculated_amount, material_id, equipment_id, labor_id, date, created_at, updated_at";

/// Provides CRUD and aggregation queries for budget line items.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a new budget line item for a task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        input: &CreateBudget,
    ) -> Result<Budget, sqlx::Error> {
        let query = format!(
            "INSERT INTO budgets (task_id, category, amount, budget_type, entry_type,
                 quantity, calculated_amount, material_id, equipment_id, labor_id, date)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'manual'), $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(task_id)
            .bind(&input.category)
            .bind(input.amount)
            .bind(input.budget_type.as_str())
            .bind(&input.entry_type)
            .bind(input.quantity)
            .bind(input.calculated_amount)
            .bind(input.material_id)
            .bind(input.equipment_id)
            .bind(input.labor_id)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find a budget line item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE id = $1");
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all budget line items for a task, oldest first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Budget>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM budgets WHERE task_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Budget>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// `(budget_type, amount)` pairs for every line item across all of a
    /// project's tasks (stats input).
    pub async fn amounts_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<(String, f64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT b.budget_type, b.amount
             FROM budgets b
             JOIN tasks t ON t.id = b.task_id
             WHERE t.project_id = $1",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Update a budget line item. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBudget,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!(
            "UPDATE budgets SET
                category = COALESCE($2, category),
                amount = COALESCE($3, amount),
                budget_type = COALESCE($4, budget_type),
                entry_type = COALESCE($5, entry_type),
                quantity = COALESCE($6, quantity),
                calculated_amount = COALESCE($7, calculated_amount),
                date = COALESCE($8, date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(input.amount)
            .bind(input.budget_type.map(|t| t.as_str()))
            .bind(&input.entry_type)
            .bind(input.quantity)
            .bind(input.calculated_amount)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a budget line item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
