//! Screens, their tabs and fields, and screen schemes.

mod scheme;
mod tab;
mod tab_field;

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    AvailableScreenFieldScheme, ScreenFieldPageScheme, ScreenParamsScheme, ScreenScheme,
    ScreenSearchPageScheme,
};

use super::core::{require, Endpoint, ServiceCore};

pub use scheme::ScreenSchemeService;
pub use tab::ScreenTabService;
pub use tab_field::ScreenTabFieldService;

#[derive(Serialize)]
struct ScreenPayload<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
}

#[derive(Debug, Clone)]
pub struct ScreenService {
    core: ServiceCore,
    pub scheme: ScreenSchemeService,
    pub tab: ScreenTabService,
}

impl ScreenService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector.clone(), version)?,
            scheme: ScreenSchemeService::new(connector.clone(), version)?,
            tab: ScreenTabService::new(connector, version)?,
        })
    }

    /// Returns a page of the screens a field is on, with the tab it sits in.
    ///
    /// `GET /rest/api/{v}/field/{fieldId}/screens`
    pub async fn fields(
        &self,
        field_id: &str,
        start_at: i64,
        max_results: i64,
    ) -> Result<(ScreenFieldPageScheme, ResponseScheme)> {
        require(field_id, ApiError::NoFieldId)?;

        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        self.core
            .fetch(
                Endpoint::get(self.core.api(&format!("field/{}/screens", field_id)))
                    .query(query),
            )
            .await
    }

    /// Returns a page of screens.
    ///
    /// `GET /rest/api/{v}/screens`
    pub async fn gets(
        &self,
        options: Option<&ScreenParamsScheme>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(ScreenSearchPageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_repeated("id", &options.ids)
                .add_non_empty("queryString", &options.query_string)
                .add_joined("scope", &options.scope)
                .add_non_empty("orderBy", &options.order_by);
        }

        self.core
            .fetch(Endpoint::get(self.core.api("screens")).query(query))
            .await
    }

    /// Creates a screen with a default tab.
    ///
    /// `POST /rest/api/{v}/screens`
    pub async fn create(
        &self,
        name: &str,
        description: &str,
    ) -> Result<(ScreenScheme, ResponseScheme)> {
        require(name, ApiError::NoScreenName)?;
        let endpoint = Endpoint::post(self.core.api("screens"))
            .json(&ScreenPayload { name, description })?;
        self.core.fetch(endpoint).await
    }

    /// Updates a screen's name or description. Empty values are left as they
    /// are.
    ///
    /// `PUT /rest/api/{v}/screens/{screenId}`
    pub async fn update(
        &self,
        screen_id: i64,
        name: &str,
        description: &str,
    ) -> Result<(ScreenScheme, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;
        let endpoint = Endpoint::put(self.core.api(&format!("screens/{}", screen_id)))
            .json(&ScreenPayload { name, description })?;
        self.core.fetch(endpoint).await
    }

    /// Deletes a screen. Screens used by a scheme or workflow cannot be
    /// deleted.
    ///
    /// `DELETE /rest/api/{v}/screens/{screenId}`
    pub async fn delete(&self, screen_id: i64) -> Result<ResponseScheme> {
        require(&screen_id, ApiError::NoScreenId)?;
        self.core
            .execute(Endpoint::delete(
                self.core.api(&format!("screens/{}", screen_id)),
            ))
            .await
    }

    /// Adds a field to the default tab of the default screen.
    ///
    /// `POST /rest/api/{v}/screens/addToDefault/{fieldId}`
    pub async fn add_to_default(&self, field_id: &str) -> Result<ResponseScheme> {
        require(field_id, ApiError::NoFieldId)?;
        self.core
            .execute(Endpoint::post(
                self.core.api(&format!("screens/addToDefault/{}", field_id)),
            ))
            .await
    }

    /// Returns the fields that can be added to a screen's tabs.
    ///
    /// `GET /rest/api/{v}/screens/{screenId}/availableFields`
    pub async fn available(
        &self,
        screen_id: i64,
    ) -> Result<(Vec<AvailableScreenFieldScheme>, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;
        self.core
            .fetch(Endpoint::get(
                self.core
                    .api(&format!("screens/{}/availableFields", screen_id)),
            ))
            .await
    }
}
