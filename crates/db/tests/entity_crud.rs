//! Integration tests for the repository layer against a real database:
//! full hierarchy creation, filtered listing, cascade deletes, unique
//! constraint violations, and the tagged-parent cleanup on delete.

use sitetrack_core::status::{BudgetType, IssueStatus, ParentKind, ProjectStatus, TaskStatus};
use sitetrack_core::types::DbId;
use sqlx::PgPool;

use sitetrack_db::models::admin::CreateAdmin;
use sitetrack_db::models::budget::CreateBudget;
use sitetrack_db::models::document::CreateDocument;
use sitetrack_db::models::issue::{CreateIssue, IssueFilter};
use sitetrack_db::models::material::CreateMaterial;
use sitetrack_db::models::progress_update::NewProgressUpdate;
use sitetrack_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use sitetrack_db::models::task::{CreateTask, TaskFilter};
use sitetrack_db::models::user::CreateUser;
use sitetrack_db::repositories::{
    AdminRepo, BudgetRepo, DocumentRepo, IssueRepo, MaterialRepo, ProgressUpdateRepo, ProjectRepo,
    TaskRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_admin(email: &str) -> CreateAdmin {
    CreateAdmin {
        name: "Site Engineer".to_string(),
        email: email.to_string(),
        role: None,
        phone: None,
    }
}

fn new_project(name: &str, engineer: DbId) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        location_name: None,
        status: None,
        start_date: None,
        end_date: None,
        budget_estimate: None,
        actual_cost: None,
        currency: None,
        contractor_name: None,
        client_name: None,
        funding_source: None,
        engineer_in_charge: engineer,
        progress_percent: None,
        notes: None,
    }
}

fn new_task(project_id: DbId, admin_id: DbId, name: &str) -> CreateTask {
    CreateTask {
        project_id,
        name: name.to_string(),
        description: None,
        start_date: None,
        due_date: None,
        assigned_to_admin: admin_id,
    }
}

fn new_budget(category: &str, amount: f64, budget_type: BudgetType) -> CreateBudget {
    CreateBudget {
        category: category.to_string(),
        amount,
        budget_type,
        entry_type: None,
        quantity: None,
        calculated_amount: None,
        material_id: None,
        equipment_id: None,
        labor_id: None,
        date: None,
    }
}

fn new_update(parent_kind: ParentKind, parent_id: DbId, percent: i32) -> NewProgressUpdate {
    NewProgressUpdate {
        parent_kind,
        parent_id,
        description: format!("reached {percent}%"),
        progress_percent: percent,
        images: vec![],
        date: None,
    }
}

// ---------------------------------------------------------------------------
// Creation and defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("eng@example.com"))
        .await
        .unwrap();
    assert_eq!(admin.role, "engineer");

    let project = ProjectRepo::create(&pool, &new_project("Bridge", admin.id))
        .await
        .unwrap();
    assert_eq!(project.status, "planning");
    assert_eq!(project.progress_percent, 0);
    assert_eq!(project.currency, "KES");

    let task = TaskRepo::create(&pool, &new_task(project.id, admin.id, "Foundations"))
        .await
        .unwrap();
    assert_eq!(task.status, "pending");
    assert_eq!(task.progress_percent, 0);

    let material = MaterialRepo::create(
        &pool,
        task.id,
        &CreateMaterial {
            name: "Cement".to_string(),
            unit: "bag".to_string(),
            unit_cost: Some(12.5),
            quantity_required: Some(200.0),
            quantity_used: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(material.quantity_used, 0.0);

    let budget = BudgetRepo::create(
        &pool,
        task.id,
        &new_budget("Concrete works", 1500.0, BudgetType::Budgeted),
    )
    .await
    .unwrap();
    assert_eq!(budget.budget_type, "budgeted");
    assert_eq!(budget.entry_type, "manual");

    let update = ProgressUpdateRepo::create(&pool, &new_update(ParentKind::Task, task.id, 10))
        .await
        .unwrap();
    assert_eq!(update.parent_kind, "task");
    assert!(update.images.0.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_admin_email_violates_unique_constraint(pool: PgPool) {
    AdminRepo::create(&pool, &new_admin("dup@example.com"))
        .await
        .unwrap();
    let err = AdminRepo::create(&pool, &new_admin("dup@example.com"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_admins_email"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Listing and filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_list_filters_by_status(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("filter@example.com"))
        .await
        .unwrap();

    let mut planning = new_project("Planning One", admin.id);
    planning.status = Some(ProjectStatus::Planning);
    ProjectRepo::create(&pool, &planning).await.unwrap();

    let mut active = new_project("Active One", admin.id);
    active.status = Some(ProjectStatus::InProgress);
    ProjectRepo::create(&pool, &active).await.unwrap();

    let filter = ProjectFilter {
        status: Some(ProjectStatus::InProgress),
        engineer_id: None,
    };
    let projects = ProjectRepo::list(&pool, &filter, 10, 0).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Active One");
    assert_eq!(ProjectRepo::count(&pool, &filter).await.unwrap(), 1);

    // No filter returns both.
    let all = ProjectRepo::list(&pool, &ProjectFilter::default(), 10, 0)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_list_filters_and_overdue(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("tasks@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Road", admin.id))
        .await
        .unwrap();

    let mut overdue = new_task(project.id, admin.id, "Old survey");
    overdue.due_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1);
    let overdue = TaskRepo::create(&pool, &overdue).await.unwrap();

    let mut done = new_task(project.id, admin.id, "Done survey");
    done.due_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1);
    let done = TaskRepo::create(&pool, &done).await.unwrap();
    TaskRepo::set_status(&pool, done.id, TaskStatus::Completed, 100)
        .await
        .unwrap();

    let overdue_tasks = TaskRepo::list_overdue(&pool).await.unwrap();
    assert_eq!(overdue_tasks.len(), 1);
    assert_eq!(overdue_tasks[0].id, overdue.id);

    let filter = TaskFilter {
        project_id: Some(project.id),
        status: Some(TaskStatus::Completed),
        assigned_to: None,
    };
    let completed = TaskRepo::list(&pool, &filter, 10, 0).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_and_user_listings_order_by_name(pool: PgPool) {
    for (name, email) in [("Wanjiru", "w@example.com"), ("Achieng", "a@example.com")] {
        let mut admin = new_admin(email);
        admin.name = name.to_string();
        AdminRepo::create(&pool, &admin).await.unwrap();
        UserRepo::create(
            &pool,
            &CreateUser {
                name: name.to_string(),
                email: format!("user-{email}"),
                user_type: None,
                phone: None,
            },
        )
        .await
        .unwrap();
    }

    let admins = AdminRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = admins.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Achieng", "Wanjiru"]);

    let users = UserRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Achieng", "Wanjiru"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_issue_list_filters_by_status_and_project(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("issues@example.com"))
        .await
        .unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Client".to_string(),
            email: "client@example.com".to_string(),
            user_type: None,
            phone: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(user.user_type, "client");

    let project = ProjectRepo::create(&pool, &new_project("Dam", admin.id))
        .await
        .unwrap();

    let open = IssueRepo::create(
        &pool,
        &CreateIssue {
            project_id: project.id,
            submitted_by_user_id: Some(user.id),
            description: "Leak in the east wall".to_string(),
            status: None,
            date_reported: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(open.status, "open");

    IssueRepo::set_status(&pool, open.id, IssueStatus::Resolved)
        .await
        .unwrap();

    let filter = IssueFilter {
        project_id: Some(project.id),
        status: Some(IssueStatus::Resolved),
        submitted_by: None,
    };
    let resolved = IssueRepo::list(&pool, &filter, 10, 0).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, open.id);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_update_applies_only_provided_fields(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("update@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Original", admin.id))
        .await
        .unwrap();

    let input = UpdateProject {
        name: Some("Renamed".to_string()),
        status: Some(ProjectStatus::InProgress),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status, "in_progress");
    // Untouched fields keep their values.
    assert_eq!(updated.currency, project.currency);
    assert_eq!(updated.engineer_in_charge, admin.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_of_missing_row_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, uuid::Uuid::new_v4(), &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Deletes and cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete_cascades_and_cleans_tagged_updates(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("cascade@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Doomed", admin.id))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, admin.id, "Doomed task"))
        .await
        .unwrap();
    BudgetRepo::create(&pool, task.id, &new_budget("Labor", 40.0, BudgetType::Actual))
        .await
        .unwrap();
    DocumentRepo::create(
        &pool,
        &CreateDocument {
            project_id: project.id,
            file_name: "plan.pdf".to_string(),
            file_type: "pdf".to_string(),
            file_url: "https://files.example.com/plan.pdf".to_string(),
            uploaded_by_admin_id: admin.id,
        },
    )
    .await
    .unwrap();
    ProgressUpdateRepo::create(&pool, &new_update(ParentKind::Project, project.id, 30))
        .await
        .unwrap();
    ProgressUpdateRepo::create(&pool, &new_update(ParentKind::Task, task.id, 15))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    // FK cascades removed the task tree and documents.
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
    let docs = DocumentRepo::count(&pool, Some(project.id)).await.unwrap();
    assert_eq!(docs, 0);

    // Tagged-parent rows have no FK and are removed explicitly, including
    // the task-scoped ones belonging to the cascaded tasks.
    let remaining = ProgressUpdateRepo::count(&pool, Some((ParentKind::Project, project.id)))
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    let task_scoped = ProgressUpdateRepo::count(&pool, Some((ParentKind::Task, task.id)))
        .await
        .unwrap();
    assert_eq!(task_scoped, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_delete_removes_task_scoped_updates_only(pool: PgPool) {
    let admin = AdminRepo::create(&pool, &new_admin("taskdel@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Keeper", admin.id))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, admin.id, "Doomed task"))
        .await
        .unwrap();

    ProgressUpdateRepo::create(&pool, &new_update(ParentKind::Task, task.id, 40))
        .await
        .unwrap();
    ProgressUpdateRepo::create(&pool, &new_update(ParentKind::Project, project.id, 20))
        .await
        .unwrap();

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());

    let task_scoped = ProgressUpdateRepo::count(&pool, Some((ParentKind::Task, task.id)))
        .await
        .unwrap();
    assert_eq!(task_scoped, 0);

    // Project-scoped updates survive a task delete.
    let project_scoped = ProgressUpdateRepo::count(&pool, Some((ParentKind::Project, project.id)))
        .await
        .unwrap();
    assert_eq!(project_scoped, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_of_missing_row_returns_false(pool: PgPool) {
    assert!(!ProjectRepo::delete(&pool, uuid::Uuid::new_v4()).await.unwrap());
    assert!(!TaskRepo::delete(&pool, uuid::Uuid::new_v4()).await.unwrap());
}
