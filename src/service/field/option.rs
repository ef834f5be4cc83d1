//! Select-list options within a custom field context.

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    CustomFieldContextOptionPageScheme, FieldContextOptionListScheme, FieldOptionContextParams,
    OrderFieldOptionPayloadScheme,
};
use crate::service::core::{require, Endpoint, ServiceCore};

#[derive(Debug, Clone)]
pub struct FieldContextOptionService {
    core: ServiceCore,
}

impl FieldContextOptionService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    fn path(&self, field_id: &str, context_id: i64, tail: &str) -> String {
        self.core
            .api(&format!("field/{}/context/{}/option{}", field_id, context_id, tail))
    }

    /// Returns a page of options for a context.
    ///
    /// `GET /rest/api/{v}/field/{fieldId}/context/{contextId}/option`
    pub async fn gets(
        &self,
        field_id: &str,
        context_id: i64,
        options: Option<&FieldOptionContextParams>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(CustomFieldContextOptionPageScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;

        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_non_zero("optionId", options.option_id)
                .add_bool("onlyOptions", options.only_options);
        }

        self.core
            .fetch(Endpoint::get(self.path(field_id, context_id, "")).query(query))
            .await
    }

    /// Creates options in a context. Cascading child options name their
    /// parent in `option_id`.
    ///
    /// `POST /rest/api/{v}/field/{fieldId}/context/{contextId}/option`
    pub async fn create(
        &self,
        field_id: &str,
        context_id: i64,
        payload: &FieldContextOptionListScheme,
    ) -> Result<(FieldContextOptionListScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;

        let endpoint = Endpoint::post(self.path(field_id, context_id, "")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Updates option values or their disabled flag.
    ///
    /// `PUT /rest/api/{v}/field/{fieldId}/context/{contextId}/option`
    pub async fn update(
        &self,
        field_id: &str,
        context_id: i64,
        payload: &FieldContextOptionListScheme,
    ) -> Result<(FieldContextOptionListScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;

        let endpoint = Endpoint::put(self.path(field_id, context_id, "")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// `DELETE /rest/api/{v}/field/{fieldId}/context/{contextId}/option/{optionId}`
    pub async fn delete(
        &self,
        field_id: &str,
        context_id: i64,
        option_id: i64,
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;
        require(&option_id, ApiError::NoContextOptionId)?;

        self.core
            .execute(Endpoint::delete(self.path(
                field_id,
                context_id,
                &format!("/{}", option_id),
            )))
            .await
    }

    /// Reorders options, placing them after another option or at the first
    /// or last position.
    ///
    /// `PUT /rest/api/{v}/field/{fieldId}/context/{contextId}/option/move`
    pub async fn order(
        &self,
        field_id: &str,
        context_id: i64,
        payload: &OrderFieldOptionPayloadScheme,
    ) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        require(&context_id, ApiError::NoFieldContextId)?;

        let endpoint = Endpoint::put(self.path(field_id, context_id, "/move")).json(payload)?;
        self.core.execute(endpoint).await
    }
}
