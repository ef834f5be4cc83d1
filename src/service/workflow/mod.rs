//! Workflows and workflow schemes.

mod scheme;

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    WorkflowCreatedResponseScheme, WorkflowPageScheme, WorkflowPayloadScheme,
    WorkflowSearchOptions,
};

use super::core::{require, Endpoint, ServiceCore};

pub use scheme::WorkflowSchemeService;

#[derive(Debug, Clone)]
pub struct WorkflowService {
    core: ServiceCore,
    pub scheme: WorkflowSchemeService,
}

impl WorkflowService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector.clone(), version)?,
            scheme: WorkflowSchemeService::new(connector, version)?,
        })
    }

    /// Creates a workflow from statuses and transitions.
    ///
    /// `POST /rest/api/{v}/workflow`
    pub async fn create(
        &self,
        payload: &WorkflowPayloadScheme,
    ) -> Result<(WorkflowCreatedResponseScheme, ResponseScheme)> {
        let endpoint = Endpoint::post(self.core.api("workflow")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Returns a page of published classic workflows.
    ///
    /// `GET /rest/api/{v}/workflow/search`
    pub async fn gets(
        &self,
        options: Option<&WorkflowSearchOptions>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(WorkflowPageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_repeated("workflowName", &options.workflow_names)
                .add_joined("expand", &options.expand)
                .add_non_empty("queryString", &options.query_string)
                .add_non_empty("orderBy", &options.order_by);

            if let Some(is_active) = options.is_active {
                query.add_bool("isActive", is_active);
            }
        }

        self.core
            .fetch(Endpoint::get(self.core.api("workflow/search")).query(query))
            .await
    }

    /// Deletes an inactive workflow by entity ID.
    ///
    /// `DELETE /rest/api/{v}/workflow/{entityId}`
    pub async fn delete(&self, workflow_id: &str) -> Result<ResponseScheme> {
        require(workflow_id, ApiError::NoWorkflowId)?;
        self.core
            .execute(Endpoint::delete(
                self.core.api(&format!("workflow/{}", workflow_id)),
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{http_error, MockConnector};
    use crate::models::{WorkflowStatusPayloadScheme, WorkflowTransitionPayloadScheme};
    use reqwest::Method;

    #[tokio::test]
    async fn test_create() {
        let mock = MockConnector::responding(
            201,
            serde_json::json!({"name": "Workflow 1", "entityId": "d7178e8d-bf6c-4c0c-9a2b-4e2f5f2ff4f1"}),
        );
        let service = WorkflowService::new(mock.clone(), "3").unwrap();

        let payload = WorkflowPayloadScheme {
            name: "Workflow 1".to_string(),
            description: String::new(),
            statuses: vec![
                WorkflowStatusPayloadScheme {
                    id: "1".to_string(),
                    properties: None,
                },
                WorkflowStatusPayloadScheme {
                    id: "3".to_string(),
                    properties: None,
                },
            ],
            transitions: vec![WorkflowTransitionPayloadScheme {
                name: "Created".to_string(),
                to: "1".to_string(),
                kind: "initial".to_string(),
                ..Default::default()
            }],
        };
        let (created, _) = service.create(&payload).await.unwrap();

        assert_eq!(created.entity_id, "d7178e8d-bf6c-4c0c-9a2b-4e2f5f2ff4f1");
        assert_eq!(mock.last_method(), Method::POST);
        assert_eq!(mock.last_endpoint(), "rest/api/3/workflow");
        assert_eq!(
            mock.last_json(),
            serde_json::json!({
                "name": "Workflow 1",
                "statuses": [{"id": "1"}, {"id": "3"}],
                "transitions": [{"name": "Created", "to": "1", "type": "initial"}]
            })
        );
    }

    #[tokio::test]
    async fn test_gets() {
        for version in ["2", "3"] {
            let mock = MockConnector::responding(200, serde_json::json!({"values": []}));
            let service = WorkflowService::new(mock.clone(), version).unwrap();

            let options = WorkflowSearchOptions {
                workflow_names: vec!["workflow-name".to_string()],
                expand: vec!["transitions".to_string(), "statuses".to_string()],
                is_active: Some(true),
                ..Default::default()
            };
            service.gets(Some(&options), 0, 50).await.unwrap();

            assert_eq!(
                mock.last_endpoint(),
                format!(
                    "rest/api/{}/workflow/search?expand=transitions%2Cstatuses&isActive=true\
                     &maxResults=50&startAt=0&workflowName=workflow-name",
                    version
                )
            );
        }
    }

    #[tokio::test]
    async fn test_gets_omits_unset_active_flag() {
        let mock = MockConnector::responding(200, serde_json::json!({}));
        let service = WorkflowService::new(mock.clone(), "3").unwrap();

        let options = WorkflowSearchOptions {
            query_string: "Software Simplified".to_string(),
            ..Default::default()
        };
        service.gets(Some(&options), 0, 50).await.unwrap();

        assert_eq!(
            mock.last_endpoint(),
            "rest/api/3/workflow/search?maxResults=50&queryString=Software+Simplified&startAt=0"
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let mock = MockConnector::no_content();
        let service = WorkflowService::new(mock.clone(), "3").unwrap();

        service.delete("d7178e8d").await.unwrap();

        assert_eq!(mock.last_method(), Method::DELETE);
        assert_eq!(mock.last_endpoint(), "rest/api/3/workflow/d7178e8d");
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let mock = MockConnector::no_content();
        let service = WorkflowService::new(mock.clone(), "3").unwrap();

        assert!(matches!(service.delete("").await.unwrap_err(), ApiError::NoWorkflowId));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_call_error_is_returned_unchanged() {
        let mock = MockConnector::failing_call(http_error(400, "workflow is active"));
        let service = WorkflowService::new(mock, "3").unwrap();

        let err = service.delete("d7178e8d").await.unwrap_err();

        assert_eq!(err.response().unwrap().text(), "workflow is active");
    }
}
