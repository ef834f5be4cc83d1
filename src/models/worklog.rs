//! Worklog models.
//!
//! `comment` is an Atlassian Document Format document on API version 3 and
//! a plain string on version 2, so it is carried as raw JSON.

use serde::{Deserialize, Serialize};

use super::common::is_zero;
use super::user::UserScheme;

/// A worklog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueWorklogScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub author: Option<UserScheme>,
    pub update_author: Option<UserScheme>,
    pub comment: Option<serde_json::Value>,
    pub created: String,
    pub updated: String,
    pub visibility: Option<WorklogVisibilityScheme>,
    pub started: String,
    /// e.g. `"3h 20m"`.
    pub time_spent: String,
    pub time_spent_seconds: i64,
    pub id: String,
    pub issue_id: String,
    pub properties: Vec<serde_json::Value>,
}

/// Restricts who can see a worklog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogVisibilityScheme {
    /// `group` or `role`.
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub identifier: Option<String>,
}

/// Returned by `GET /rest/api/{v}/issue/{issueIdOrKey}/worklog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueWorklogPageScheme {
    pub start_at: i64,
    pub max_results: i64,
    pub total: i64,
    pub worklogs: Vec<IssueWorklogScheme>,
}

super::common::paginated!(IssueWorklogPageScheme, worklogs);

/// IDs of worklogs changed since a point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangedWorklogPageScheme {
    pub values: Vec<ChangedWorklogScheme>,
    /// Unix time in milliseconds.
    pub since: i64,
    pub until: i64,
    #[serde(rename = "self")]
    pub self_url: String,
    pub next_page: Option<String>,
    pub last_page: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangedWorklogScheme {
    pub worklog_id: i64,
    pub updated_time: i64,
    pub properties: Vec<serde_json::Value>,
}

/// Query options for adding, updating and deleting worklogs.
///
/// `notify` and `override_editable_flag` are always sent; the estimate
/// fields only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorklogOptionsScheme {
    pub notify: bool,
    /// `new`, `leave`, `manual` or `auto`.
    pub adjust_estimate: String,
    pub new_estimate: String,
    pub reduce_by: String,
    pub increase_by: String,
    pub override_editable_flag: bool,
    pub expand: Vec<String>,
}

/// Body for adding or updating a worklog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub visibility: Option<WorklogVisibilityScheme>,
    /// e.g. `2021-01-17T12:34:00.000+0000`.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub started: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub time_spent: String,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub time_spent_seconds: i64,
}
