//! Dashboard aggregation queries
//!
//! Every aggregate takes the same `owner` filter as the task list, so
//! the numbers a user sees always describe exactly the tasks they can
//! see.

use shared::models::{EmployeeStats, TaskDetail};
use sqlx::SqlitePool;

pub async fn count_total(pool: &SqlitePool, owner: Option<i64>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM tasks
        WHERE (? IS NULL OR employee_id = ?)
        "#,
    )
    .bind(owner)
    .bind(owner)
    .fetch_one(pool)
    .await
}

pub async fn count_completed(pool: &SqlitePool, owner: Option<i64>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM tasks
        WHERE status = 'completed' AND (? IS NULL OR employee_id = ?)
        "#,
    )
    .bind(owner)
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Tasks past their due date and not completed.
pub async fn count_overdue(pool: &SqlitePool, owner: Option<i64>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM tasks
        WHERE due_date < date('now')
          AND status != 'completed'
          AND (? IS NULL OR employee_id = ?)
        "#,
    )
    .bind(owner)
    .bind(owner)
    .fetch_one(pool)
    .await
}

pub async fn count_by_status(
    pool: &SqlitePool,
    owner: Option<i64>,
) -> Result<Vec<(String, i64)>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT status, COUNT(*)
        FROM tasks
        WHERE (? IS NULL OR employee_id = ?)
        GROUP BY status
        "#,
    )
    .bind(owner)
    .bind(owner)
    .fetch_all(pool)
    .await
}

pub async fn count_by_priority(
    pool: &SqlitePool,
    owner: Option<i64>,
) -> Result<Vec<(String, i64)>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT priority, COUNT(*)
        FROM tasks
        WHERE (? IS NULL OR employee_id = ?)
        GROUP BY priority
        "#,
    )
    .bind(owner)
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// The five most recently created visible tasks, joined like the task
/// list.
pub async fn recent_tasks(
    pool: &SqlitePool,
    owner: Option<i64>,
) -> Result<Vec<TaskDetail>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT t.id, t.title, t.description, t.status, t.priority,
               t.employee_id, t.due_date, t.created_at, t.updated_at,
               e.name AS employee_name, e.department
        FROM tasks t
        JOIN employees e ON t.employee_id = e.id
        WHERE (? IS NULL OR t.employee_id = ?)
        ORDER BY t.created_at DESC, t.id DESC
        LIMIT 5
        "#,
    )
    .bind(owner)
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Per-employee task rollup for the admin view. Employees without
/// tasks appear with zeroed counters.
pub async fn employee_rollups(pool: &SqlitePool) -> Result<Vec<EmployeeStats>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT e.id, e.name, e.department,
               COUNT(t.id) AS total_tasks,
               COALESCE(SUM(CASE WHEN t.status = 'completed' THEN 1 ELSE 0 END), 0)
                   AS completed_tasks,
               COALESCE(SUM(CASE WHEN t.status = 'in-progress' THEN 1 ELSE 0 END), 0)
                   AS in_progress_tasks,
               COALESCE(SUM(CASE WHEN t.status = 'pending' THEN 1 ELSE 0 END), 0)
                   AS pending_tasks
        FROM employees e
        LEFT JOIN tasks t ON e.id = t.employee_id
        GROUP BY e.id
        ORDER BY total_tasks DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
