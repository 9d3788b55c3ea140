//! Seed the database with demo employees and tasks.
//!
//! Run with `cargo run --bin seed`. Does nothing when the employees
//! table already has rows, so it is safe to run repeatedly.

use anyhow::Context;
use shared::models::{Role, TaskCreate, TaskPriority, TaskStatus};
use task_server::config::Config;
use task_server::state::AppState;
use task_server::{db, util};

const DEMO_PASSWORD: &str = "password123";

struct DemoEmployee {
    name: &'static str,
    email: &'static str,
    role: Role,
    department: &'static str,
}

const EMPLOYEES: [DemoEmployee; 5] = [
    DemoEmployee {
        name: "John Doe",
        email: "john@company.com",
        role: Role::Admin,
        department: "Engineering",
    },
    DemoEmployee {
        name: "Jane Smith",
        email: "jane@company.com",
        role: Role::User,
        department: "Marketing",
    },
    DemoEmployee {
        name: "Mike Johnson",
        email: "mike@company.com",
        role: Role::User,
        department: "Sales",
    },
    DemoEmployee {
        name: "Sarah Williams",
        email: "sarah@company.com",
        role: Role::User,
        department: "HR",
    },
    DemoEmployee {
        name: "Tom Brown",
        email: "tom@company.com",
        role: Role::User,
        department: "Engineering",
    },
];

struct DemoTask {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    /// Index into [`EMPLOYEES`]
    assignee: usize,
    due_date: &'static str,
}

const TASKS: [DemoTask; 10] = [
    DemoTask {
        title: "Complete API Documentation",
        description: "Write comprehensive API documentation for all endpoints",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee: 0,
        due_date: "2025-12-15",
    },
    DemoTask {
        title: "Design Database Schema",
        description: "Create ERD and database schema for new features",
        status: TaskStatus::Completed,
        priority: TaskPriority::High,
        assignee: 0,
        due_date: "2025-11-20",
    },
    DemoTask {
        title: "Marketing Campaign Planning",
        description: "Plan Q1 2026 marketing campaign",
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        assignee: 1,
        due_date: "2025-12-30",
    },
    DemoTask {
        title: "Social Media Strategy",
        description: "Develop social media content calendar",
        status: TaskStatus::InProgress,
        priority: TaskPriority::Medium,
        assignee: 1,
        due_date: "2025-12-10",
    },
    DemoTask {
        title: "Sales Presentation",
        description: "Prepare presentation for potential clients",
        status: TaskStatus::Pending,
        priority: TaskPriority::High,
        assignee: 2,
        due_date: "2025-12-05",
    },
    DemoTask {
        title: "Lead Follow-up",
        description: "Follow up with leads from last week",
        status: TaskStatus::InProgress,
        priority: TaskPriority::Low,
        assignee: 2,
        due_date: "2025-12-01",
    },
    DemoTask {
        title: "Employee Onboarding",
        description: "Create onboarding process for new hires",
        status: TaskStatus::Completed,
        priority: TaskPriority::High,
        assignee: 3,
        due_date: "2025-11-25",
    },
    DemoTask {
        title: "Policy Review",
        description: "Review and update company policies",
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        assignee: 3,
        due_date: "2026-01-15",
    },
    DemoTask {
        title: "Code Review",
        description: "Review pull requests from team members",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee: 4,
        due_date: "2025-11-28",
    },
    DemoTask {
        title: "Bug Fixes",
        description: "Fix reported bugs in production",
        status: TaskStatus::Pending,
        priority: TaskPriority::High,
        assignee: 4,
        due_date: "2025-12-02",
    },
];

#[tokio::main]
async fn main() -> Result<(), task_server::BoxError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,task_server=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config).await?;

    if !db::employees::list(&state.pool).await?.is_empty() {
        println!("Database already has employees, nothing to do");
        return Ok(());
    }

    let password_hash = util::hash_password(DEMO_PASSWORD).context("hashing demo password")?;

    let mut ids = Vec::with_capacity(EMPLOYEES.len());
    for demo in &EMPLOYEES {
        let employee = db::employees::insert(
            &state.pool,
            demo.name,
            demo.email,
            &password_hash,
            demo.role,
            Some(demo.department),
        )
        .await
        .with_context(|| format!("inserting employee {}", demo.email))?;
        ids.push(employee.id);
    }

    for demo in &TASKS {
        let data = TaskCreate {
            title: demo.title.to_string(),
            description: Some(demo.description.to_string()),
            status: Some(demo.status),
            priority: Some(demo.priority),
            employee_id: ids[demo.assignee],
            due_date: Some(demo.due_date.parse().context("parsing demo due date")?),
        };
        db::tasks::insert(&state.pool, &data)
            .await
            .with_context(|| format!("inserting task {}", demo.title))?;
    }

    println!("Seeded {} employees and {} tasks", EMPLOYEES.len(), TASKS.len());
    println!();
    println!("Demo credentials:");
    println!("  Admin: john@company.com / {DEMO_PASSWORD}");
    println!("  User:  jane@company.com / {DEMO_PASSWORD}");

    Ok(())
}
