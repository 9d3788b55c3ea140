//! Employee queries

use shared::models::{Employee, EmployeePublic, Role};
use sqlx::SqlitePool;

// ── Lookup ──

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, email, password, role, department, created_at
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, email, password, role, department, created_at
        FROM employees
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// True when the email is already used by another employee.
///
/// `exclude_id` skips one row, so updates do not collide with the row
/// being updated.
pub async fn email_taken(
    pool: &SqlitePool,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM employees
        WHERE email = ? AND (? IS NULL OR id != ?)
        "#,
    )
    .bind(email)
    .bind(exclude_id)
    .bind(exclude_id)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<EmployeePublic>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, email, role, department, created_at
        FROM employees
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

// ── Writes ──

/// Insert an employee and read the stored row back.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
    department: Option<&str>,
) -> Result<Employee, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, email, password, role, department)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(department)
    .execute(pool)
    .await?;

    // Read back for the DB-assigned id and created_at
    sqlx::query_as(
        r#"
        SELECT id, name, email, password, role, department, created_at
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(result.last_insert_rowid())
    .fetch_one(pool)
    .await
}

/// Write back a merged row. Callers fetch, apply the update payload,
/// then persist; the password column is left untouched here.
pub async fn update(pool: &SqlitePool, employee: &Employee) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE employees
        SET name = ?, email = ?, role = ?, department = ?
        WHERE id = ?
        "#,
    )
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(employee.role)
    .bind(&employee.department)
    .bind(employee.id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Delete an employee; owned tasks go with it via ON DELETE CASCADE.
/// Returns false when no row matched.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
