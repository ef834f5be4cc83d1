//! Bulk issue operation models.

use serde::{Deserialize, Serialize};

/// Body for `POST /rest/api/{v}/bulk/issues/delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeletePayload {
    pub selected_issue_ids_or_keys: Vec<String>,
    pub send_bulk_notification: bool,
}

/// Handle for a submitted bulk task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkTaskScheme {
    pub task_id: String,
}

/// Progress of a bulk task, returned by `GET /rest/api/{v}/bulk/queue/{taskId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkTaskProgressScheme {
    pub task_id: String,
    /// `ENQUEUED`, `RUNNING`, `COMPLETE`, `FAILED`, `CANCEL_REQUESTED`,
    /// `CANCELLED` or `DEAD`.
    pub status: String,
    pub progress_percent: i64,
    pub submitted_by: Option<serde_json::Value>,
    pub created: Option<String>,
    pub started: Option<String>,
    pub updated: Option<String>,
    pub processed_accessible_issues: Vec<i64>,
    pub invalid_or_inaccessible_issue_count: i64,
    pub total_issue_count: i64,
}

impl BulkTaskProgressScheme {
    /// Whether the task has stopped, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_str(),
            "COMPLETE" | "FAILED" | "CANCELLED" | "DEAD"
        )
    }
}
