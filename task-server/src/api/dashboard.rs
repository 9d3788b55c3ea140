//! Dashboard aggregation endpoint

use axum::Json;
use axum::extract::{Extension, State};
use shared::models::DashboardSummary;

use super::ApiResult;
use crate::auth::{CurrentUser, policy};
use crate::db;
use crate::state::AppState;

/// Aggregate statistics over the caller-visible tasks.
///
/// Admins additionally get the per-employee rollup; for users the
/// `employeeStats` field is null and every number covers only their own
/// tasks.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<DashboardSummary> {
    let owner = policy::visible_owner(&user);

    let total = db::dashboard::count_total(&state.pool, owner).await?;
    let completed = db::dashboard::count_completed(&state.pool, owner).await?;
    let overdue = db::dashboard::count_overdue(&state.pool, owner).await?;
    let by_status = db::dashboard::count_by_status(&state.pool, owner).await?;
    let by_priority = db::dashboard::count_by_priority(&state.pool, owner).await?;
    let recent = db::dashboard::recent_tasks(&state.pool, owner).await?;

    // The rollup covers all employees, so it follows the same policy
    // filter: only an unrestricted caller gets it
    let employee_stats = if owner.is_none() {
        Some(db::dashboard::employee_rollups(&state.pool).await?)
    } else {
        None
    };

    // Percentage with two decimals; exactly 0 when there are no tasks
    let completion_rate = if total > 0 {
        (completed as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    };

    Ok(Json(DashboardSummary {
        total_tasks: total,
        completion_rate,
        overdue_tasks: overdue,
        tasks_by_status: by_status.into_iter().collect(),
        tasks_by_priority: by_priority.into_iter().collect(),
        recent_tasks: recent,
        employee_stats,
    }))
}
