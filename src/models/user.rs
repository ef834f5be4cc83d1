//! User and group membership models.

use serde::{Deserialize, Serialize};

use super::common::{paginated, AvatarUrls};

/// A Jira user.
///
/// Returned by `GET /rest/api/{v}/user`, `GET /rest/api/{v}/myself` and the
/// user search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScheme {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// The user's account ID.
    #[serde(default)]
    pub account_id: String,
    /// `atlassian`, `app` or `customer`.
    #[serde(default)]
    pub account_type: Option<String>,
    /// The user's email address (may be hidden by privacy settings).
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub display_name: String,
    /// Whether the user is active.
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub avatar_urls: Option<AvatarUrls>,
    /// Present when `expand=groups` was requested.
    #[serde(default)]
    pub groups: Option<UserGroupsScheme>,
    /// Present when `expand=applicationRoles` was requested.
    #[serde(default)]
    pub application_roles: Option<serde_json::Value>,
    #[serde(default)]
    pub expand: Option<String>,
}

fn default_true() -> bool {
    true
}

impl UserScheme {
    /// Application accounts are bots and integrations, not people.
    pub fn is_app(&self) -> bool {
        self.account_type.as_deref() == Some("app")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupsScheme {
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub items: Vec<UserGroupScheme>,
    #[serde(default)]
    pub max_results: i64,
}

/// A group a user belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGroupScheme {
    pub name: String,
    pub group_id: String,
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Body for `POST /rest/api/{v}/user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayloadScheme {
    pub email_address: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub display_name: String,
    /// Products to grant access to, e.g. `jira-software`.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub products: Vec<String>,
}

/// A page of users, returned by `GET /rest/api/{v}/user/bulk`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSearchPageScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub next_page: Option<String>,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<UserScheme>,
}

paginated!(UserSearchPageScheme, values);

/// Filters for `GET /rest/api/{v}/user/permission/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPermissionCheckParamsScheme {
    pub query: String,
    pub account_id: String,
    pub issue_key: String,
    pub project_key: String,
}
