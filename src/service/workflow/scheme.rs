//! Workflow schemes and their project associations.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    WorkflowSchemeAssociationPageScheme, WorkflowSchemePageScheme, WorkflowSchemePayloadScheme,
    WorkflowSchemeScheme,
};
use crate::service::core::{require, Endpoint, ServiceCore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemeAssignment<'a> {
    workflow_scheme_id: &'a str,
    project_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct WorkflowSchemeService {
    core: ServiceCore,
}

impl WorkflowSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Returns a page of workflow schemes.
    ///
    /// `GET /rest/api/{v}/workflowscheme`
    pub async fn gets(
        &self,
        start_at: i64,
        max_results: i64,
    ) -> Result<(WorkflowSchemePageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        self.core
            .fetch(Endpoint::get(self.core.api("workflowscheme")).query(query))
            .await
    }

    /// Returns a workflow scheme, or its draft when `return_draft_if_exists`
    /// is set and a draft exists.
    ///
    /// `GET /rest/api/{v}/workflowscheme/{id}`
    pub async fn get(
        &self,
        scheme_id: i64,
        return_draft_if_exists: bool,
    ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
        require(&scheme_id, ApiError::NoWorkflowSchemeId)?;

        let mut query = QueryParams::new();
        query.add_bool("returnDraftIfExists", return_draft_if_exists);

        self.core
            .fetch(
                Endpoint::get(self.core.api(&format!("workflowscheme/{}", scheme_id)))
                    .query(query),
            )
            .await
    }

    /// `POST /rest/api/{v}/workflowscheme`
    pub async fn create(
        &self,
        payload: &WorkflowSchemePayloadScheme,
    ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
        let endpoint = Endpoint::post(self.core.api("workflowscheme")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Updates a workflow scheme. For an active scheme set
    /// `update_draft_if_needed` to edit its draft instead.
    ///
    /// `PUT /rest/api/{v}/workflowscheme/{id}`
    pub async fn update(
        &self,
        scheme_id: i64,
        payload: &WorkflowSchemePayloadScheme,
    ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
        require(&scheme_id, ApiError::NoWorkflowSchemeId)?;
        let endpoint = Endpoint::put(self.core.api(&format!("workflowscheme/{}", scheme_id)))
            .json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Deletes an inactive workflow scheme.
    ///
    /// `DELETE /rest/api/{v}/workflowscheme/{id}`
    pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
        require(&scheme_id, ApiError::NoWorkflowSchemeId)?;
        self.core
            .execute(Endpoint::delete(
                self.core.api(&format!("workflowscheme/{}", scheme_id)),
            ))
            .await
    }

    /// Returns the workflow schemes used by the given projects.
    ///
    /// `GET /rest/api/{v}/workflowscheme/project`
    pub async fn associations(
        &self,
        project_ids: &[i64],
    ) -> Result<(WorkflowSchemeAssociationPageScheme, ResponseScheme)> {
        require(project_ids, ApiError::NoProjects)?;

        let mut query = QueryParams::new();
        query.add_repeated("projectId", project_ids);

        self.core
            .fetch(Endpoint::get(self.core.api("workflowscheme/project")).query(query))
            .await
    }

    /// Assigns a workflow scheme to a company-managed project. The project
    /// must have no issues.
    ///
    /// `PUT /rest/api/{v}/workflowscheme/project`
    pub async fn assign(&self, scheme_id: &str, project_id: &str) -> Result<ResponseScheme> {
        require(scheme_id, ApiError::NoWorkflowSchemeId)?;
        require(project_id, ApiError::NoProjectId)?;

        let endpoint = Endpoint::put(self.core.api("workflowscheme/project")).json(
            &SchemeAssignment {
                workflow_scheme_id: scheme_id,
                project_id,
            },
        )?;
        self.core.execute(endpoint).await
    }
}
