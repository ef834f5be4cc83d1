//! Notification scheme models.

use serde::{Deserialize, Serialize};

use super::common::paginated;

/// Filters for `GET /rest/api/{v}/notificationscheme`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSchemeSearchOptions {
    pub notification_scheme_ids: Vec<String>,
    pub project_ids: Vec<String>,
    pub only_default: bool,
    /// `all`, `field`, `group`, `notificationSchemeEvents`, `projectRole`,
    /// `user`.
    pub expand: Vec<String>,
}

/// A notification scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSchemeScheme {
    pub expand: Option<String>,
    pub id: i64,
    #[serde(rename = "self")]
    pub self_url: String,
    pub name: String,
    pub description: Option<String>,
    pub notification_scheme_events: Vec<NotificationSchemeEventScheme>,
    pub scope: Option<serde_json::Value>,
    pub projects: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSchemeEventScheme {
    pub event: Option<NotificationEventScheme>,
    pub notifications: Vec<EventNotificationScheme>,
}

/// A Jira event, e.g. "Issue created".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationEventScheme {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Who gets notified for an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventNotificationScheme {
    pub expand: Option<String>,
    pub id: i64,
    /// `CurrentAssignee`, `Reporter`, `Group`, `ProjectRole`, `EmailAddress`,
    /// `User`, `UserCustomField` ...
    pub notification_type: String,
    pub parameter: Option<String>,
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSchemePageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<NotificationSchemeScheme>,
}

paginated!(NotificationSchemePageScheme, values);

/// Body for creating, renaming or extending a notification scheme.
///
/// Empty fields are omitted so updates only touch what is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSchemePayloadScheme {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notification_scheme_events: Vec<NotificationSchemePayloadEventScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSchemePayloadEventScheme {
    pub event: NotificationSchemeEventTypeScheme,
    pub notifications: Vec<NotificationSchemeEventNotificationScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSchemeEventTypeScheme {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSchemeEventNotificationScheme {
    pub notification_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub parameter: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSchemeCreatedPayload {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSchemeProjectMappingScheme {
    pub notification_scheme_id: String,
    pub project_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSchemeProjectPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<NotificationSchemeProjectMappingScheme>,
}

paginated!(NotificationSchemeProjectPageScheme, values);
