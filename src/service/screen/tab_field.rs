//! Fields placed on a screen tab.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, ResponseScheme, Result};
use crate::models::ScreenTabFieldScheme;
use crate::service::core::{require, Endpoint, ServiceCore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldId<'a> {
    field_id: &'a str,
}

#[derive(Serialize)]
struct MovePosition<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    after: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    position: &'a str,
}

#[derive(Debug, Clone)]
pub struct ScreenTabFieldService {
    core: ServiceCore,
}

impl ScreenTabFieldService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    fn path(&self, screen_id: i64, tab_id: i64, tail: &str) -> String {
        self.core
            .api(&format!("screens/{}/tabs/{}/fields{}", screen_id, tab_id, tail))
    }

    /// Returns the fields on a tab.
    ///
    /// `GET /rest/api/{v}/screens/{screenId}/tabs/{tabId}/fields`
    pub async fn gets(
        &self,
        screen_id: i64,
        tab_id: i64,
    ) -> Result<(Vec<ScreenTabFieldScheme>, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        self.core
            .fetch(Endpoint::get(self.path(screen_id, tab_id, "")))
            .await
    }

    /// Adds a field to a tab.
    ///
    /// `POST /rest/api/{v}/screens/{screenId}/tabs/{tabId}/fields`
    pub async fn add(
        &self,
        screen_id: i64,
        tab_id: i64,
        field_id: &str,
    ) -> Result<(ScreenTabFieldScheme, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        require(field_id, ApiError::NoFieldId)?;

        let endpoint =
            Endpoint::post(self.path(screen_id, tab_id, "")).json(&FieldId { field_id })?;
        self.core.fetch(endpoint).await
    }

    /// `DELETE /rest/api/{v}/screens/{screenId}/tabs/{tabId}/fields/{fieldId}`
    pub async fn remove(&self, screen_id: i64, tab_id: i64, field_id: &str) -> Result<ResponseScheme> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        require(field_id, ApiError::NoFieldId)?;
        self.core
            .execute(Endpoint::delete(
                self.path(screen_id, tab_id, &format!("/{}", field_id)),
            ))
            .await
    }

    /// Moves a field after another field (`after` is that field's ID) or to
    /// `position` (`Earlier`, `Later`, `First` or `Last`).
    ///
    /// `POST /rest/api/{v}/screens/{screenId}/tabs/{tabId}/fields/{fieldId}/move`
    pub async fn move_to(
        &self,
        screen_id: i64,
        tab_id: i64,
        field_id: &str,
        after: &str,
        position: &str,
    ) -> Result<ResponseScheme> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        require(field_id, ApiError::NoFieldId)?;

        let endpoint = Endpoint::post(self.path(screen_id, tab_id, &format!("/{}/move", field_id)))
            .json(&MovePosition { after, position })?;
        self.core.execute(endpoint).await
    }
}
