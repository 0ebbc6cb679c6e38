pub mod admin_repo;
pub mod budget_repo;
pub mod document_repo;
pub mod equipment_repo;
pub mod issue_repo;
pub mod labor_repo;
pub mod material_repo;
pub mod progress_update_repo;
pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub use admin_repo::AdminRepo;
pub use budget_repo::BudgetRepo;
pub use document_repo::DocumentRepo;
pub use equipment_repo::EquipmentRepo;
pub use issue_repo::IssueRepo;
pub use labor_repo::LaborRepo;
pub use material_repo::MaterialRepo;
pub use progress_update_repo::ProgressUpdateRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
