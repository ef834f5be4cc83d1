//! Group models.

use serde::{Deserialize, Serialize};

use super::common::paginated;
use super::user::UserScheme;

/// A group, returned by group creation and membership changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupScheme {
    pub name: String,
    pub group_id: String,
    #[serde(rename = "self")]
    pub self_url: String,
    pub users: Option<GroupUserPageScheme>,
    pub expand: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupUserPageScheme {
    pub size: i64,
    pub items: Vec<UserScheme>,
    pub max_results: i64,
    pub start_index: i64,
    pub end_index: i64,
}

/// Filters for `GET /rest/api/{v}/group/bulk`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupBulkOptionsScheme {
    pub group_ids: Vec<String>,
    pub group_names: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupDetailScheme {
    pub name: String,
    pub group_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkGroupScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<GroupDetailScheme>,
}

paginated!(BulkGroupScheme, values);

/// Members of a group, returned by `GET /rest/api/{v}/group/member`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupMemberPageScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub next_page: Option<String>,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<UserScheme>,
}

paginated!(GroupMemberPageScheme, values);
