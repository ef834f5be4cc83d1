//! Workflow and workflow scheme models.
//!
//! Transition rules, screens and properties vary by app and rule type and
//! are kept as raw JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::paginated;
use super::user::UserScheme;

/// Filters for `GET /rest/api/{v}/workflow/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowSearchOptions {
    /// Sent as repeated `workflowName` values.
    pub workflow_names: Vec<String>,
    /// `transitions`, `transitions.rules`, `statuses`, `default` ...
    pub expand: Vec<String>,
    pub query_string: String,
    pub order_by: String,
    /// Only sent when set.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowPageScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub next_page: Option<String>,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<WorkflowScheme>,
}

paginated!(WorkflowPageScheme, values);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowScheme {
    pub id: Option<WorkflowPublishedIdScheme>,
    pub description: String,
    pub transitions: Vec<WorkflowTransitionScheme>,
    pub statuses: Vec<WorkflowStatusScheme>,
    pub is_default: bool,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Identifies a published workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowPublishedIdScheme {
    pub name: String,
    pub entity_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowTransitionScheme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub from: Vec<String>,
    pub to: String,
    /// `global`, `initial` or `directed`.
    #[serde(rename = "type")]
    pub kind: String,
    pub screen: Option<serde_json::Value>,
    pub rules: Option<serde_json::Value>,
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowStatusScheme {
    pub id: String,
    pub name: String,
    pub properties: Option<serde_json::Value>,
}

/// Body for `POST /rest/api/{v}/workflow`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub statuses: Vec<WorkflowStatusPayloadScheme>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub transitions: Vec<WorkflowTransitionPayloadScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatusPayloadScheme {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTransitionPayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub from: Vec<String>,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rules: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub screen: Option<WorkflowTransitionScreenScheme>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTransitionScreenScheme {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowCreatedResponseScheme {
    pub name: String,
    pub entity_id: String,
}

/// A workflow scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowSchemeScheme {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub default_workflow: String,
    /// Issue type ID to workflow name.
    pub issue_type_mappings: BTreeMap<String, String>,
    pub original_default_workflow: Option<String>,
    pub original_issue_type_mappings: Option<BTreeMap<String, String>>,
    /// Whether this is a draft of an active scheme.
    pub draft: bool,
    pub last_modified_user: Option<UserScheme>,
    pub last_modified: Option<String>,
    #[serde(rename = "self")]
    pub self_url: String,
    pub update_draft_if_needed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowSchemePageScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub next_page: Option<String>,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<WorkflowSchemeScheme>,
}

paginated!(WorkflowSchemePageScheme, values);

/// Body for creating or updating a workflow scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchemePayloadScheme {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub default_workflow: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub issue_type_mappings: BTreeMap<String, String>,
    /// Create a draft when the scheme is active.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub update_draft_if_needed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowSchemeAssociationsScheme {
    pub project_ids: Vec<String>,
    pub workflow_scheme: Option<WorkflowSchemeScheme>,
}

/// Returned by `GET /rest/api/{v}/workflowscheme/project`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowSchemeAssociationPageScheme {
    pub values: Vec<WorkflowSchemeAssociationsScheme>,
}
