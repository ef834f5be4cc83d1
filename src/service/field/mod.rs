//! Issue fields, including custom field contexts and their options.

mod context;
mod option;

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    CustomFieldPayload, FieldSearchOptions, FieldSearchPageScheme, IssueFieldScheme, TaskScheme,
};

use super::core::{require, Endpoint, ServiceCore};

pub use context::FieldContextService;
pub use option::FieldContextOptionService;

#[derive(Debug, Clone)]
pub struct FieldService {
    core: ServiceCore,
    pub context: FieldContextService,
}

impl FieldService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector.clone(), version)?,
            context: FieldContextService::new(connector, version)?,
        })
    }

    /// Returns every system and custom field visible to the caller.
    ///
    /// `GET /rest/api/{v}/field`
    pub async fn gets(&self) -> Result<(Vec<IssueFieldScheme>, ResponseScheme)> {
        self.core.fetch(Endpoint::get(self.core.api("field"))).await
    }

    /// Creates a custom field.
    ///
    /// `POST /rest/api/{v}/field`
    pub async fn create(
        &self,
        payload: &CustomFieldPayload,
    ) -> Result<(IssueFieldScheme, ResponseScheme)> {
        let endpoint = Endpoint::post(self.core.api("field")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Returns a page of fields matching `options`.
    ///
    /// `GET /rest/api/{v}/field/search`
    pub async fn search(
        &self,
        options: Option<&FieldSearchOptions>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(FieldSearchPageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_joined("type", &options.types)
                .add_joined("id", &options.ids)
                .add_non_empty("query", &options.query)
                .add_non_empty("orderBy", &options.order_by)
                .add_joined("expand", &options.expand);
        }

        self.core
            .fetch(Endpoint::get(self.core.api("field/search")).query(query))
            .await
    }

    /// Deletes a custom field. Jira removes it asynchronously; the returned
    /// task tracks the deletion.
    ///
    /// `DELETE /rest/api/{v}/field/{id}`
    pub async fn delete(&self, field_id: &str) -> Result<(TaskScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        self.core
            .fetch(Endpoint::delete(self.core.api(&format!("field/{}", field_id))))
            .await
    }

    /// Moves a custom field to the trash.
    ///
    /// `POST /rest/api/{v}/field/{id}/trash`
    pub async fn trash(&self, field_id: &str) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        self.core
            .execute(Endpoint::post(self.core.api(&format!("field/{}/trash", field_id))))
            .await
    }

    /// Restores a custom field from the trash.
    ///
    /// `POST /rest/api/{v}/field/{id}/restore`
    pub async fn restore(&self, field_id: &str) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        self.core
            .execute(Endpoint::post(
                self.core.api(&format!("field/{}/restore", field_id)),
            ))
            .await
    }
}
