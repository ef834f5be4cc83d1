//! Issue worklogs.
//!
//! Worklog bodies are sent as-is, so `comment` must be ADF on version 3 and
//! a plain string on version 2.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    ChangedWorklogPageScheme, IssueWorklogPageScheme, IssueWorklogScheme, WorklogOptionsScheme,
    WorklogPayloadScheme,
};

use super::core::{require, Endpoint, ServiceCore};

#[derive(Serialize)]
struct WorklogIds<'a> {
    ids: &'a [i64],
}

#[derive(Debug, Clone)]
pub struct WorklogService {
    core: ServiceCore,
}

impl WorklogService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    fn issue_path(&self, issue_key_or_id: &str, tail: &str) -> String {
        self.core
            .api(&format!("issue/{}/worklog{}", issue_key_or_id, tail))
    }

    /// Returns up to 1,000 worklogs by ID.
    ///
    /// `POST /rest/api/{v}/worklog/list`
    pub async fn gets(
        &self,
        worklog_ids: &[i64],
        expand: &[String],
    ) -> Result<(Vec<IssueWorklogScheme>, ResponseScheme)> {
        require(worklog_ids, ApiError::NoWorklogs)?;

        let mut query = QueryParams::new();
        query.add_joined("expand", expand);

        let endpoint = Endpoint::post(self.core.api("worklog/list"))
            .query(query)
            .json(&WorklogIds { ids: worklog_ids })?;
        self.core.fetch(endpoint).await
    }

    /// Returns a worklog.
    ///
    /// `GET /rest/api/{v}/issue/{issueIdOrKey}/worklog/{id}`
    pub async fn get(
        &self,
        issue_key_or_id: &str,
        worklog_id: &str,
        expand: &[String],
    ) -> Result<(IssueWorklogScheme, ResponseScheme)> {
        require(issue_key_or_id, ApiError::NoIssueKeyOrId)?;
        require(worklog_id, ApiError::NoWorklogId)?;

        let mut query = QueryParams::new();
        query.add_joined("expand", expand);

        self.core
            .fetch(
                Endpoint::get(self.issue_path(issue_key_or_id, &format!("/{}", worklog_id)))
                    .query(query),
            )
            .await
    }

    /// Returns a page of an issue's worklogs, optionally only those started
    /// after `started_after` (Unix milliseconds; zero for all).
    ///
    /// `GET /rest/api/{v}/issue/{issueIdOrKey}/worklog`
    pub async fn issue(
        &self,
        issue_key_or_id: &str,
        start_at: i64,
        max_results: i64,
        started_after: i64,
        expand: &[String],
    ) -> Result<(IssueWorklogPageScheme, ResponseScheme)> {
        require(issue_key_or_id, ApiError::NoIssueKeyOrId)?;

        let mut query = QueryParams::new();
        query
            .add_page(start_at, max_results)
            .add_non_zero("startedAfter", started_after)
            .add_joined("expand", expand);

        self.core
            .fetch(Endpoint::get(self.issue_path(issue_key_or_id, "")).query(query))
            .await
    }

    /// Adds a worklog to an issue.
    ///
    /// `POST /rest/api/{v}/issue/{issueIdOrKey}/worklog`
    pub async fn add(
        &self,
        issue_key_or_id: &str,
        payload: &WorklogPayloadScheme,
        options: Option<&WorklogOptionsScheme>,
    ) -> Result<(IssueWorklogScheme, ResponseScheme)> {
        require(issue_key_or_id, ApiError::NoIssueKeyOrId)?;

        let endpoint = Endpoint::post(self.issue_path(issue_key_or_id, ""))
            .query(worklog_query(options))
            .json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Updates a worklog.
    ///
    /// `PUT /rest/api/{v}/issue/{issueIdOrKey}/worklog/{id}`
    pub async fn update(
        &self,
        issue_key_or_id: &str,
        worklog_id: &str,
        payload: &WorklogPayloadScheme,
        options: Option<&WorklogOptionsScheme>,
    ) -> Result<(IssueWorklogScheme, ResponseScheme)> {
        require(issue_key_or_id, ApiError::NoIssueKeyOrId)?;
        require(worklog_id, ApiError::NoWorklogId)?;

        let endpoint = Endpoint::put(self.issue_path(issue_key_or_id, &format!("/{}", worklog_id)))
            .query(worklog_query(options))
            .json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Deletes a worklog.
    ///
    /// `DELETE /rest/api/{v}/issue/{issueIdOrKey}/worklog/{id}`
    pub async fn delete(
        &self,
        issue_key_or_id: &str,
        worklog_id: &str,
        options: Option<&WorklogOptionsScheme>,
    ) -> Result<ResponseScheme> {
        require(issue_key_or_id, ApiError::NoIssueKeyOrId)?;
        require(worklog_id, ApiError::NoWorklogId)?;

        self.core
            .execute(
                Endpoint::delete(self.issue_path(issue_key_or_id, &format!("/{}", worklog_id)))
                    .query(worklog_query(options)),
            )
            .await
    }

    /// Returns IDs of worklogs deleted since `since` (Unix milliseconds).
    ///
    /// `GET /rest/api/{v}/worklog/deleted`
    pub async fn deleted(&self, since: i64) -> Result<(ChangedWorklogPageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_non_zero("since", since);

        self.core
            .fetch(Endpoint::get(self.core.api("worklog/deleted")).query(query))
            .await
    }

    /// Returns IDs of worklogs updated since `since` (Unix milliseconds).
    ///
    /// `GET /rest/api/{v}/worklog/updated`
    pub async fn updated(
        &self,
        since: i64,
        expand: &[String],
    ) -> Result<(ChangedWorklogPageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query
            .add_non_zero("since", since)
            .add_joined("expand", expand);

        self.core
            .fetch(Endpoint::get(self.core.api("worklog/updated")).query(query))
            .await
    }
}

fn worklog_query(options: Option<&WorklogOptionsScheme>) -> QueryParams {
    let mut query = QueryParams::new();
    if let Some(options) = options {
        query
            .add_bool("notifyUsers", options.notify)
            .add_non_empty("adjustEstimate", &options.adjust_estimate)
            .add_non_empty("newEstimate", &options.new_estimate)
            .add_non_empty("reduceBy", &options.reduce_by)
            .add_non_empty("increaseBy", &options.increase_by)
            .add_bool("overrideEditableFlag", options.override_editable_flag)
            .add_joined("expand", &options.expand);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{http_error, MockConnector};
    use reqwest::Method;

    fn payload() -> WorklogPayloadScheme {
        WorklogPayloadScheme {
            comment: Some(serde_json::json!({
                "type": "doc",
                "version": 1,
                "content": [{"type": "paragraph", "content": [{"type": "text", "text": "I did some work here."}]}]
            })),
            started: "2021-01-17T12:34:00.000+0000".to_string(),
            time_spent_seconds: 12000,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_gets() {
        for version in ["2", "3"] {
            let mock = MockConnector::responding(200, serde_json::json!([{"id": "100028", "timeSpentSeconds": 12000}]));
            let service = WorklogService::new(mock.clone(), version).unwrap();

            let (worklogs, _) = service
                .gets(&[1, 2, 3], &["properties".to_string()])
                .await
                .unwrap();

            assert_eq!(worklogs[0].time_spent_seconds, 12000);
            assert_eq!(mock.last_method(), Method::POST);
            assert_eq!(
                mock.last_endpoint(),
                format!("rest/api/{}/worklog/list?expand=properties", version)
            );
            assert_eq!(mock.last_json(), serde_json::json!({"ids": [1, 2, 3]}));
        }
    }

    #[tokio::test]
    async fn test_gets_requires_ids() {
        let mock = MockConnector::no_content();
        let service = WorklogService::new(mock.clone(), "3").unwrap();

        assert!(matches!(service.gets(&[], &[]).await.unwrap_err(), ApiError::NoWorklogs));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_get() {
        let mock = MockConnector::responding(200, serde_json::json!({"id": "100028", "issueId": "10002"}));
        let service = WorklogService::new(mock.clone(), "3").unwrap();

        let (worklog, _) = service.get("KP-1", "100028", &[]).await.unwrap();

        assert_eq!(worklog.issue_id, "10002");
        assert_eq!(mock.last_endpoint(), "rest/api/3/issue/KP-1/worklog/100028");
    }

    #[tokio::test]
    async fn test_issue() {
        let mock = MockConnector::responding(
            200,
            serde_json::json!({"startAt": 0, "maxResults": 1, "total": 2, "worklogs": [{"id": "100028"}]}),
        );
        let service = WorklogService::new(mock.clone(), "2").unwrap();

        let (page, _) = service
            .issue("KP-1", 0, 1, 1610889240000, &[])
            .await
            .unwrap();

        assert_eq!(page.worklogs.len(), 1);
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/2/issue/KP-1/worklog?maxResults=1&startAt=0&startedAfter=1610889240000"
        );
    }

    #[tokio::test]
    async fn test_add_with_options() {
        let mock = MockConnector::responding(201, serde_json::json!({"id": "100030"}));
        let service = WorklogService::new(mock.clone(), "3").unwrap();

        let options = WorklogOptionsScheme {
            notify: true,
            adjust_estimate: "new".to_string(),
            new_estimate: "2d".to_string(),
            ..Default::default()
        };
        let (worklog, _) = service.add("KP-1", &payload(), Some(&options)).await.unwrap();

        assert_eq!(worklog.id, "100030");
        assert_eq!(mock.last_method(), Method::POST);
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/3/issue/KP-1/worklog?adjustEstimate=new&newEstimate=2d&notifyUsers=true&overrideEditableFlag=false"
        );
        let body = mock.last_json();
        assert_eq!(body["timeSpentSeconds"], 12000);
        assert_eq!(body["comment"]["type"], "doc");
    }

    #[tokio::test]
    async fn test_add_without_options() {
        let mock = MockConnector::responding(201, serde_json::json!({"id": "100030"}));
        let service = WorklogService::new(mock.clone(), "2").unwrap();

        service.add("KP-1", &payload(), None).await.unwrap();

        assert_eq!(mock.last_endpoint(), "rest/api/2/issue/KP-1/worklog");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mock = MockConnector::responding(200, serde_json::json!({"id": "100028"}));
        let service = WorklogService::new(mock.clone(), "3").unwrap();
        let options = WorklogOptionsScheme {
            adjust_estimate: "manual".to_string(),
            increase_by: "1h".to_string(),
            ..Default::default()
        };

        service.update("KP-1", "100028", &payload(), None).await.unwrap();
        assert_eq!(mock.last_method(), Method::PUT);
        assert_eq!(mock.last_endpoint(), "rest/api/3/issue/KP-1/worklog/100028");

        service.delete("KP-1", "100028", Some(&options)).await.unwrap();
        assert_eq!(mock.last_method(), Method::DELETE);
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/3/issue/KP-1/worklog/100028?adjustEstimate=manual&increaseBy=1h&notifyUsers=false&overrideEditableFlag=false"
        );
    }

    #[tokio::test]
    async fn test_required_inputs() {
        let mock = MockConnector::no_content();
        let service = WorklogService::new(mock.clone(), "3").unwrap();

        assert!(matches!(service.get("", "1", &[]).await.unwrap_err(), ApiError::NoIssueKeyOrId));
        assert!(matches!(service.get("KP-1", "", &[]).await.unwrap_err(), ApiError::NoWorklogId));
        assert!(matches!(service.issue("", 0, 50, 0, &[]).await.unwrap_err(), ApiError::NoIssueKeyOrId));
        assert!(matches!(service.add("", &payload(), None).await.unwrap_err(), ApiError::NoIssueKeyOrId));
        assert!(matches!(
            service.update("KP-1", "", &payload(), None).await.unwrap_err(),
            ApiError::NoWorklogId
        ));
        assert!(matches!(service.delete("KP-1", "", None).await.unwrap_err(), ApiError::NoWorklogId));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_deleted_and_updated() {
        let mock = MockConnector::responding(
            200,
            serde_json::json!({"values": [{"worklogId": 103, "updatedTime": 1438013693136_i64}], "since": 1438013671562_i64, "lastPage": true}),
        );
        let service = WorklogService::new(mock.clone(), "3").unwrap();

        let (page, _) = service.deleted(1438013671562).await.unwrap();
        assert_eq!(page.values[0].worklog_id, 103);
        assert!(page.last_page);
        assert_eq!(mock.last_endpoint(), "rest/api/3/worklog/deleted?since=1438013671562");

        service.updated(0, &["properties".to_string()]).await.unwrap();
        assert_eq!(mock.last_endpoint(), "rest/api/3/worklog/updated?expand=properties");
    }

    #[tokio::test]
    async fn test_call_error_is_returned_unchanged() {
        let mock = MockConnector::failing_call(http_error(403, "cannot edit"));
        let service = WorklogService::new(mock, "3").unwrap();

        let err = service.delete("KP-1", "100028", None).await.unwrap_err();

        assert_eq!(err.status().unwrap().as_u16(), 403);
    }
}
