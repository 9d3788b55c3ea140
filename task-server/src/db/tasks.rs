//! Task queries
//!
//! List/read queries return the joined [`TaskDetail`] shape (task row
//! plus the owning employee's name and department); policy checks work
//! on the bare [`Task`] row.

use shared::models::{Task, TaskCreate, TaskDetail, TaskFilter};
use sqlx::SqlitePool;

// ── Reads ──

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, title, description, status, priority,
               employee_id, due_date, created_at, updated_at
        FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> Result<Option<TaskDetail>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT t.id, t.title, t.description, t.status, t.priority,
               t.employee_id, t.due_date, t.created_at, t.updated_at,
               e.name AS employee_name, e.department
        FROM tasks t
        JOIN employees e ON t.employee_id = e.id
        WHERE t.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Visibility-filtered task list, newest first.
///
/// `owner` is the policy filter (None for admins); the query-string
/// filters stack on top of it, so a user filtering on someone else's
/// `employee_id` gets an empty list rather than an error.
pub async fn list(
    pool: &SqlitePool,
    owner: Option<i64>,
    filter: &TaskFilter,
) -> Result<Vec<TaskDetail>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT t.id, t.title, t.description, t.status, t.priority,
               t.employee_id, t.due_date, t.created_at, t.updated_at,
               e.name AS employee_name, e.department
        FROM tasks t
        JOIN employees e ON t.employee_id = e.id
        WHERE (? IS NULL OR t.employee_id = ?)
          AND (? IS NULL OR t.status = ?)
          AND (? IS NULL OR t.employee_id = ?)
          AND (? IS NULL OR t.priority = ?)
        ORDER BY t.created_at DESC, t.id DESC
        "#,
    )
    .bind(owner)
    .bind(owner)
    .bind(filter.status)
    .bind(filter.status)
    .bind(filter.employee_id)
    .bind(filter.employee_id)
    .bind(filter.priority)
    .bind(filter.priority)
    .fetch_all(pool)
    .await
}

/// Every task assigned to one employee, newest first.
pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, title, description, status, priority,
               employee_id, due_date, created_at, updated_at
        FROM tasks
        WHERE employee_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await
}

// ── Writes ──

/// Insert a task and return its id. Status and priority fall back to
/// their defaults when the payload leaves them out.
pub async fn insert(pool: &SqlitePool, data: &TaskCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO tasks (title, description, status, priority, employee_id, due_date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.status.unwrap_or_default())
    .bind(data.priority.unwrap_or_default())
    .bind(data.employee_id)
    .bind(data.due_date)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Write back a merged row and bump `updated_at`.
pub async fn update(pool: &SqlitePool, task: &Task) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, status = ?, priority = ?,
            employee_id = ?, due_date = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.status)
    .bind(task.priority)
    .bind(task.employee_id)
    .bind(task.due_date)
    .bind(task.id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns false when no row matched.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
