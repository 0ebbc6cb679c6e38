//! Budget line item model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::status::BudgetType;
use sitetrack_core::types::{DateOnly, DbId, Timestamp};
use sqlx::FromRow;

/// A budget line item from the `budgets` table, owned by a task.
///
/// `budget_type` separates planned ("budgeted") from incurred ("actual")
/// spend; aggregation sums each side independently. The optional
/// material/equipment/labor references itemize calculated costs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub task_id: DbId,
    pub category: String,
    pub amount: f64,
    pub budget_type: String,
    pub entry_type: String,
    pub quantity: Option<f64>,
    pub calculated_amount: Option<f64>,
    pub material_id: Option<DbId>,
    pub equipment_id: Option<DbId>,
    pub labor_id: Option<DbId>,
    pub date: Option<DateOnly>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new budget line item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudget {
    pub category: String,
    pub amount: f64,
    pub budget_type: BudgetType,
    /// Defaults to "manual" if omitted.
    pub entry_type: Option<String>,
    pub quantity: Option<f64>,
    pub calculated_amount: Option<f64>,
    pub material_id: Option<DbId>,
    pub equipment_id: Option<DbId>,
    pub labor_id: Option<DbId>,
    pub date: Option<DateOnly>,
}

/// DTO for updating an existing budget line item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBudget {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub budget_type: Option<BudgetType>,
    pub entry_type: Option<String>,
    pub quantity: Option<f64>,
    pub calculated_amount: Option<f64>,
    pub date: Option<DateOnly>,
}
