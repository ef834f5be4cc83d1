//! Notification schemes.

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    NotificationSchemeCreatedPayload, NotificationSchemePageScheme,
    NotificationSchemePayloadScheme, NotificationSchemeProjectPageScheme,
    NotificationSchemeScheme, NotificationSchemeSearchOptions,
};

use super::core::{require, Endpoint, ServiceCore};

#[derive(Debug, Clone)]
pub struct NotificationSchemeService {
    core: ServiceCore,
}

impl NotificationSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    fn scheme_path(&self, scheme_id: &str, tail: &str) -> String {
        self.core
            .api(&format!("notificationscheme/{}{}", scheme_id, tail))
    }

    /// Returns a page of notification schemes.
    ///
    /// `GET /rest/api/{v}/notificationscheme`
    pub async fn search(
        &self,
        options: Option<&NotificationSchemeSearchOptions>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(NotificationSchemePageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_repeated("notificationSchemeId", &options.notification_scheme_ids)
                .add_repeated("projectId", &options.project_ids)
                .add_bool("onlyDefault", options.only_default)
                .add_joined("expand", &options.expand);
        }

        self.core
            .fetch(Endpoint::get(self.core.api("notificationscheme")).query(query))
            .await
    }

    /// Returns a notification scheme.
    ///
    /// `GET /rest/api/{v}/notificationscheme/{id}`
    pub async fn get(
        &self,
        scheme_id: &str,
        expand: &[String],
    ) -> Result<(NotificationSchemeScheme, ResponseScheme)> {
        require(scheme_id, ApiError::NoNotificationSchemeId)?;

        let mut query = QueryParams::new();
        query.add_joined("expand", expand);

        self.core
            .fetch(Endpoint::get(self.scheme_path(scheme_id, "")).query(query))
            .await
    }

    /// Creates a notification scheme.
    ///
    /// `POST /rest/api/{v}/notificationscheme`
    pub async fn create(
        &self,
        payload: &NotificationSchemePayloadScheme,
    ) -> Result<(NotificationSchemeCreatedPayload, ResponseScheme)> {
        let endpoint = Endpoint::post(self.core.api("notificationscheme")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Updates a scheme's name and description. Events are changed with
    /// [`append`](Self::append) and [`remove`](Self::remove).
    ///
    /// `PUT /rest/api/{v}/notificationscheme/{id}`
    pub async fn update(
        &self,
        scheme_id: &str,
        payload: &NotificationSchemePayloadScheme,
    ) -> Result<ResponseScheme> {
        require(scheme_id, ApiError::NoNotificationSchemeId)?;
        let endpoint = Endpoint::put(self.scheme_path(scheme_id, "")).json(payload)?;
        self.core.execute(endpoint).await
    }

    /// Adds event notifications to a scheme.
    ///
    /// `PUT /rest/api/{v}/notificationscheme/{id}/notification`
    pub async fn append(
        &self,
        scheme_id: &str,
        payload: &NotificationSchemePayloadScheme,
    ) -> Result<ResponseScheme> {
        require(scheme_id, ApiError::NoNotificationSchemeId)?;
        let endpoint =
            Endpoint::put(self.scheme_path(scheme_id, "/notification")).json(payload)?;
        self.core.execute(endpoint).await
    }

    /// `DELETE /rest/api/{v}/notificationscheme/{id}`
    pub async fn delete(&self, scheme_id: &str) -> Result<ResponseScheme> {
        require(scheme_id, ApiError::NoNotificationSchemeId)?;
        self.core
            .execute(Endpoint::delete(self.scheme_path(scheme_id, "")))
            .await
    }

    /// Removes one notification from a scheme.
    ///
    /// `DELETE /rest/api/{v}/notificationscheme/{id}/notification/{notificationId}`
    pub async fn remove(&self, scheme_id: &str, notification_id: &str) -> Result<ResponseScheme> {
        require(scheme_id, ApiError::NoNotificationSchemeId)?;
        require(notification_id, ApiError::NoNotificationId)?;
        self.core
            .execute(Endpoint::delete(self.scheme_path(
                scheme_id,
                &format!("/notification/{}", notification_id),
            )))
            .await
    }

    /// Returns a page of scheme-to-project mappings.
    ///
    /// `GET /rest/api/{v}/notificationscheme/project`
    pub async fn projects(
        &self,
        scheme_ids: &[String],
        project_ids: &[String],
        start_at: i64,
        max_results: i64,
    ) -> Result<(NotificationSchemeProjectPageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query
            .add_page(start_at, max_results)
            .add_repeated("notificationSchemeId", scheme_ids)
            .add_repeated("projectId", project_ids);

        self.core
            .fetch(Endpoint::get(self.core.api("notificationscheme/project")).query(query))
            .await
    }
}
