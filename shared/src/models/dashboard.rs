//! Dashboard aggregation models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::task::TaskDetail;

/// Per-employee task rollup (admin dashboard only)
///
/// Produced by a LEFT JOIN so employees without tasks appear zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeStats {
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub pending_tasks: i64,
}

/// Dashboard summary over the caller-visible task set
///
/// Serialized with camelCase keys to match the API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_tasks: i64,
    /// completed / total * 100, rounded to 2 decimals; exactly 0 when
    /// there are no tasks
    pub completion_rate: f64,
    /// Tasks past their due date and not completed
    pub overdue_tasks: i64,
    pub tasks_by_status: HashMap<String, i64>,
    pub tasks_by_priority: HashMap<String, i64>,
    /// Five most recently created visible tasks
    pub recent_tasks: Vec<TaskDetail>,
    /// Per-employee rollups; `null` for non-admin callers
    pub employee_stats: Option<Vec<EmployeeStats>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = DashboardSummary {
            total_tasks: 3,
            completion_rate: 33.33,
            overdue_tasks: 1,
            tasks_by_status: HashMap::from([("pending".to_string(), 2)]),
            tasks_by_priority: HashMap::from([("medium".to_string(), 3)]),
            recent_tasks: vec![],
            employee_stats: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalTasks"], 3);
        assert_eq!(json["completionRate"], 33.33);
        assert_eq!(json["overdueTasks"], 1);
        assert_eq!(json["tasksByStatus"]["pending"], 2);
        assert_eq!(json["tasksByPriority"]["medium"], 3);
        // Non-admin callers get an explicit null, not a missing key
        assert!(json["employeeStats"].is_null());
        assert!(json.get("employee_stats").is_none());
    }

    #[test]
    fn test_employee_stats_keys_stay_snake_case() {
        let stats = EmployeeStats {
            id: 1,
            name: "Ana".to_string(),
            department: None,
            total_tasks: 4,
            completed_tasks: 1,
            in_progress_tasks: 1,
            pending_tasks: 2,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_tasks"], 4);
        assert_eq!(json["in_progress_tasks"], 1);
    }
}
