//! Field, field context and context option models.

use serde::{Deserialize, Serialize};

use super::common::paginated;

/// A system or custom field.
///
/// Returned by `GET /rest/api/{v}/field` and `GET /rest/api/{v}/field/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFieldScheme {
    /// The field ID, e.g. `summary` or `customfield_10002`.
    pub id: String,
    pub key: String,
    pub name: String,
    pub custom: bool,
    pub orderable: bool,
    pub navigable: bool,
    pub searchable: bool,
    /// JQL names that refer to this field.
    pub clause_names: Vec<String>,
    pub scope: Option<FieldScopeScheme>,
    pub schema: Option<FieldSchemaScheme>,
    pub description: Option<String>,
    pub is_locked: bool,
    pub searcher_key: Option<String>,
    pub screens_count: i64,
    pub contexts_count: i64,
    pub last_used: Option<FieldLastUsedScheme>,
}

/// The data type of a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSchemaScheme {
    #[serde(rename = "type")]
    pub kind: String,
    /// Element type, for array fields.
    pub items: Option<String>,
    pub system: Option<String>,
    /// Custom field type key, for custom fields.
    pub custom: Option<String>,
    pub custom_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldScopeScheme {
    #[serde(rename = "type")]
    pub kind: String,
    pub project: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldLastUsedScheme {
    /// `TRACKED`, `NOT_TRACKED` or `NO_INFORMATION`.
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<String>,
}

/// Body for `POST /rest/api/{v}/field`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldPayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    /// Custom field type key, e.g.
    /// `com.atlassian.jira.plugin.system.customfieldtypes:select`.
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub searcher_key: String,
}

/// Filters for `GET /rest/api/{v}/field/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSearchOptions {
    /// `custom` and/or `system`.
    pub types: Vec<String>,
    pub ids: Vec<String>,
    pub query: String,
    pub order_by: String,
    pub expand: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSearchPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<IssueFieldScheme>,
}

paginated!(FieldSearchPageScheme, values);

/// Filters for listing the contexts of a custom field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldContextOptionsScheme {
    pub is_any_issue_type: bool,
    pub is_global_context: bool,
    /// Restrict to these context IDs; sent as repeated `contextId` values.
    pub context_ids: Vec<i64>,
}

/// A custom field context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldContextScheme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_global_context: bool,
    pub is_any_issue_type: bool,
    pub project_ids: Vec<String>,
    pub issue_type_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldContextPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<FieldContextScheme>,
}

paginated!(CustomFieldContextPageScheme, values);

/// Body for creating a custom field context.
///
/// Empty project IDs make the context global; empty issue type IDs apply it
/// to every issue type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContextPayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub project_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub issue_type_ids: Vec<String>,
}

/// A context default value.
///
/// The shape depends on `type` (`option.single`, `option.multiple`,
/// `option.cascading`, `float`, `datepicker` ...), so everything beyond the
/// discriminator and context ID is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefaultValueScheme {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub context_id: String,
    #[serde(flatten)]
    pub value: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldDefaultValuePageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<CustomFieldDefaultValueScheme>,
}

paginated!(CustomFieldDefaultValuePageScheme, values);

/// Body for `PUT /rest/api/{v}/field/{fieldId}/context/defaultValue`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContextDefaultPayloadScheme {
    pub default_values: Vec<CustomFieldDefaultValueScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueTypeToContextMappingScheme {
    pub context_id: String,
    pub issue_type_id: String,
    pub is_any_issue_type: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueTypeToContextMappingPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<IssueTypeToContextMappingScheme>,
}

paginated!(IssueTypeToContextMappingPageScheme, values);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldContextProjectMappingScheme {
    pub context_id: String,
    pub project_id: String,
    pub is_global_context: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldContextProjectMappingPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<CustomFieldContextProjectMappingScheme>,
}

paginated!(CustomFieldContextProjectMappingPageScheme, values);

/// Filters for listing context options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptionContextParams {
    /// Only return this option. Zero means all.
    pub option_id: i64,
    /// Skip cascading child options.
    pub only_options: bool,
}

/// A select-list option within a custom field context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldContextOptionScheme {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub id: String,
    pub value: String,
    /// Parent option ID, for cascading selects.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub option_id: String,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldContextOptionPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<CustomFieldContextOptionScheme>,
}

paginated!(CustomFieldContextOptionPageScheme, values);

/// Options to create or update, and the options Jira returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContextOptionListScheme {
    #[serde(default)]
    pub options: Vec<CustomFieldContextOptionScheme>,
}

/// Body for `PUT /rest/api/{v}/field/{fieldId}/context/{contextId}/option/move`.
///
/// Set either `after` (an option ID) or `position` (`First` / `Last`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFieldOptionPayloadScheme {
    pub custom_field_option_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub after: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub position: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paginated;

    #[test]
    fn test_context_page_deserializes() {
        let page: CustomFieldContextPageScheme = serde_json::from_value(serde_json::json!({
            "maxResults": 50,
            "startAt": 0,
            "total": 2,
            "isLast": false,
            "values": [
                {"id": "10025", "name": "Bug fields context", "description": "", "isGlobalContext": true, "isAnyIssueType": false},
                {"id": "10026", "name": "Task fields context", "isGlobalContext": false, "isAnyIssueType": true}
            ]
        }))
        .unwrap();

        assert_eq!(page.values[1].id, "10026");
        assert!(!page.has_more());
    }

    #[test]
    fn test_default_value_keeps_type_specific_fields() {
        let value: CustomFieldDefaultValueScheme = serde_json::from_value(serde_json::json!({
            "type": "option.single",
            "contextId": "10100",
            "optionId": "10001"
        }))
        .unwrap();

        assert_eq!(value.kind, "option.single");
        assert_eq!(value.value["optionId"], "10001");
        assert_eq!(
            serde_json::to_value(&value).unwrap()["optionId"],
            serde_json::json!("10001")
        );
    }

    #[test]
    fn test_option_payload_omits_empty_ids() {
        let options = FieldContextOptionListScheme {
            options: vec![CustomFieldContextOptionScheme {
                value: "Scranton".to_string(),
                ..Default::default()
            }],
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({"options": [{"value": "Scranton", "disabled": false}]})
        );
    }
}
