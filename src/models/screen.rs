//! Screen, screen tab and screen scheme models.

use serde::{Deserialize, Serialize};

use super::common::{is_zero, paginated};

/// Filters for `GET /rest/api/{v}/screens`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenParamsScheme {
    /// Sent as repeated `id` values.
    pub ids: Vec<i64>,
    pub query_string: String,
    /// `GLOBAL`, `TEMPLATE`, `PROJECT`; comma-joined.
    pub scope: Vec<String>,
    pub order_by: String,
}

/// A screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenScheme {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub scope: Option<ScreenScopeScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenScopeScheme {
    #[serde(rename = "type")]
    pub kind: String,
    pub project: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenSearchPageScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<ScreenScheme>,
}

paginated!(ScreenSearchPageScheme, values);

/// A screen a field appears on, with the tab that holds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenWithTabScheme {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub scope: Option<ScreenScopeScheme>,
    pub tab: Option<ScreenTabScheme>,
}

/// Returned by `GET /rest/api/{v}/field/{fieldId}/screens`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenFieldPageScheme {
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<ScreenWithTabScheme>,
}

paginated!(ScreenFieldPageScheme, values);

/// A field that can be added to a screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableScreenFieldScheme {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenTabScheme {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenTabFieldScheme {
    pub id: String,
    pub name: String,
}

/// Filters for `GET /rest/api/{v}/screenscheme`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenSchemeParamsScheme {
    pub ids: Vec<i64>,
    pub query_string: String,
    pub order_by: String,
    /// e.g. `issueTypeScreenSchemes`.
    pub expand: Vec<String>,
}

/// Screens used for each issue operation. Zero means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenTypesScheme {
    #[serde(skip_serializing_if = "is_zero")]
    pub create: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub default: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub view: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub edit: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenSchemeScheme {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub screens: Option<ScreenTypesScheme>,
    pub issue_type_screen_schemes: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenSchemePageScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub next_page: Option<String>,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<ScreenSchemeScheme>,
}

paginated!(ScreenSchemePageScheme, values);

/// Body for creating or updating a screen scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSchemePayloadScheme {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub screens: Option<ScreenTypesScheme>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_types_skip_unset_screens() {
        let payload = ScreenSchemePayloadScheme {
            name: "Employee screen scheme".to_string(),
            screens: Some(ScreenTypesScheme {
                default: 10000,
                edit: 10001,
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "name": "Employee screen scheme",
                "screens": {"default": 10000, "edit": 10001}
            })
        );
    }
}
