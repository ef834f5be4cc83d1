//! Advanced Roadmaps team models.

use serde::{Deserialize, Serialize};

/// Returned by `POST /rest/teams/1.0/teams/find`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraTeamPageScheme {
    pub more_results_available: bool,
    pub teams: Vec<JiraTeamScheme>,
    pub persons: Vec<JiraTeamPersonScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraTeamScheme {
    pub id: i64,
    pub external_id: Option<String>,
    pub title: String,
    pub shareable: bool,
    pub resources: Vec<JiraTeamResourceScheme>,
}

/// Membership of a person in a team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraTeamResourceScheme {
    pub id: i64,
    pub person_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraTeamPersonScheme {
    pub person_id: i64,
    pub jira_user: Option<JiraTeamUserScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraTeamUserScheme {
    pub account_id: String,
    pub email: Option<String>,
    pub title: String,
    pub avatar_url: Option<String>,
}

/// Body for `POST /rest/teams/1.0/teams/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraTeamCreatePayloadScheme {
    pub title: String,
    pub shareable: bool,
    #[serde(default)]
    pub resources: Vec<JiraTeamResourcePayloadScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraTeamResourcePayloadScheme {
    pub person_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraTeamCreateResponseScheme {
    pub id: i64,
    pub external_id: Option<String>,
    pub title: String,
    pub shareable: bool,
    pub resources: Vec<JiraTeamResourceScheme>,
}
