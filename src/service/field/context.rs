//! Custom field contexts.
//!
//! A context scopes a custom field to projects and issue types, and carries
//! its own default value and options.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    CustomFieldContextPageScheme, CustomFieldContextProjectMappingPageScheme,
    CustomFieldDefaultValuePageScheme, FieldContextDefaultPayloadScheme,
    FieldContextOptionsScheme, FieldContextPayloadScheme, FieldContextScheme,
    IssueTypeToContextMappingPageScheme,
};
use crate::service::core::{require, Endpoint, ServiceCore};

use super::option::FieldContextOptionService;

#[derive(Serialize)]
struct ContextUpdate<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueTypeIds<'a> {
    issue_type_ids: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectIds<'a> {
    project_ids: &'a [String],
}

#[derive(Debug, Clone)]
pub struct FieldContextService {
    core: ServiceCore,
    pub option: FieldContextOptionService,
}

impl FieldContextService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector.clone(), version)?,
            option: FieldContextOptionService::new(connector, version)?,
        })
    }

    fn path(&self, field_id: &str, tail: &str) -> String {
        if tail.is_empty() {
            self.core.api(&format!("field/{}/context", field_id))
        } else {
            self.core.api(&format!("field/{}/context/{}", field_id, tail))
        }
    }

    /// Returns a page of contexts for a custom field.
    ///
    /// `GET /rest/api/{v}/field/{fieldId}/context`
    pub async fn gets(
        &self,
        field_id: &str,
        options: Option<&FieldContextOptionsScheme>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(CustomFieldContextPageScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;

        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_repeated("contextId", &options.context_ids)
                .add_bool("isAnyIssueType", options.is_any_issue_type)
                .add_bool("isGlobalContext", options.is_global_context);
        }

        self.core
            .fetch(Endpoint::get(self.path(field_id, "")).query(query))
            .await
    }

    /// Creates a context for a custom field.
    ///
    /// `POST /rest/api/{v}/field/{fieldId}/context`
    pub async fn create(
        &self,
        field_id: &str,
        payload: &FieldContextPayloadScheme,
    ) -> Result<(FieldContextScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        let endpoint = Endpoint::post(self.path(field_id, "")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Returns the default values of a custom field's contexts.
    ///
    /// `GET /rest/api/{v}/field/{fieldId}/context/defaultValue`
    pub async fn get_default_values(
        &self,
        field_id: &str,
        context_ids: &[i64],
        start_at: i64,
        max_results: i64,
    ) -> Result<(CustomFieldDefaultValuePageScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        let query = context_page(context_ids, start_at, max_results);
        self.core
            .fetch(Endpoint::get(self.path(field_id, "defaultValue")).query(query))
            .await
    }

    /// Sets default values for one or more contexts of a custom field.
    ///
    /// `PUT /rest/api/{v}/field/{fieldId}/context/defaultValue`
    pub async fn set_default_values(
        &self,
        field_id: &str,
        payload: &FieldContextDefaultPayloadScheme,
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        let endpoint = Endpoint::put(self.path(field_id, "defaultValue")).json(payload)?;
        self.core.execute(endpoint).await
    }

    /// Returns which issue types each context applies to.
    ///
    /// `GET /rest/api/{v}/field/{fieldId}/context/issuetypemapping`
    pub async fn issue_types_context(
        &self,
        field_id: &str,
        context_ids: &[i64],
        start_at: i64,
        max_results: i64,
    ) -> Result<(IssueTypeToContextMappingPageScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        let query = context_page(context_ids, start_at, max_results);
        self.core
            .fetch(Endpoint::get(self.path(field_id, "issuetypemapping")).query(query))
            .await
    }

    /// Returns which projects each context applies to.
    ///
    /// `GET /rest/api/{v}/field/{fieldId}/context/projectmapping`
    pub async fn projects_context(
        &self,
        field_id: &str,
        context_ids: &[i64],
        start_at: i64,
        max_results: i64,
    ) -> Result<(CustomFieldContextProjectMappingPageScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        let query = context_page(context_ids, start_at, max_results);
        self.core
            .fetch(Endpoint::get(self.path(field_id, "projectmapping")).query(query))
            .await
    }

    /// Renames a context or changes its description. Empty values are left
    /// untouched.
    ///
    /// `PUT /rest/api/{v}/field/{fieldId}/context/{contextId}`
    pub async fn update(
        &self,
        field_id: &str,
        context_id: i64,
        name: &str,
        description: &str,
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;

        let endpoint = Endpoint::put(self.path(field_id, &context_id.to_string()))
            .json(&ContextUpdate { name, description })?;
        self.core.execute(endpoint).await
    }

    /// Deletes a context.
    ///
    /// `DELETE /rest/api/{v}/field/{fieldId}/context/{contextId}`
    pub async fn delete(&self, field_id: &str, context_id: i64) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;
        self.core
            .execute(Endpoint::delete(self.path(field_id, &context_id.to_string())))
            .await
    }

    /// Adds issue types to a context.
    ///
    /// `PUT /rest/api/{v}/field/{fieldId}/context/{contextId}/issuetype`
    pub async fn add_issue_types(
        &self,
        field_id: &str,
        context_id: i64,
        issue_type_ids: &[String],
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;
        require(issue_type_ids, ApiError::NoIssueTypes)?;

        let endpoint = Endpoint::put(self.path(field_id, &format!("{}/issuetype", context_id)))
            .json(&IssueTypeIds { issue_type_ids })?;
        self.core.execute(endpoint).await
    }

    /// Removes issue types from a context.
    ///
    /// `POST /rest/api/{v}/field/{fieldId}/context/{contextId}/issuetype/remove`
    pub async fn remove_issue_types(
        &self,
        field_id: &str,
        context_id: i64,
        issue_type_ids: &[String],
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;
        require(issue_type_ids, ApiError::NoIssueTypes)?;

        let endpoint = Endpoint::post(
            self.path(field_id, &format!("{}/issuetype/remove", context_id)),
        )
        .json(&IssueTypeIds { issue_type_ids })?;
        self.core.execute(endpoint).await
    }

    /// Assigns a context to projects.
    ///
    /// `PUT /rest/api/{v}/field/{fieldId}/context/{contextId}/project`
    pub async fn link(
        &self,
        field_id: &str,
        context_id: i64,
        project_ids: &[String],
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;
        require(project_ids, ApiError::NoProjects)?;

        let endpoint = Endpoint::put(self.path(field_id, &format!("{}/project", context_id)))
            .json(&ProjectIds { project_ids })?;
        self.core.execute(endpoint).await
    }

    /// Removes a context from projects.
    ///
    /// `POST /rest/api/{v}/field/{fieldId}/context/{contextId}/project/remove`
    pub async fn unlink(
        &self,
        field_id: &str,
        context_id: i64,
        project_ids: &[String],
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;
        require(project_ids, ApiError::NoProjects)?;

        let endpoint = Endpoint::post(
            self.path(field_id, &format!("{}/project/remove", context_id)),
        )
        .json(&ProjectIds { project_ids })?;
        self.core.execute(endpoint).await
    }
}

fn context_page(context_ids: &[i64], start_at: i64, max_results: i64) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .add_page(start_at, max_results)
        .add_repeated("contextId", context_ids);
    query
}
