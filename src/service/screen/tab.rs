//! Tabs on a screen.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::ScreenTabScheme;
use crate::service::core::{require, Endpoint, ServiceCore};

use super::tab_field::ScreenTabFieldService;

#[derive(Serialize)]
struct TabName<'a> {
    name: &'a str,
}

#[derive(Debug, Clone)]
pub struct ScreenTabService {
    core: ServiceCore,
    pub field: ScreenTabFieldService,
}

impl ScreenTabService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector.clone(), version)?,
            field: ScreenTabFieldService::new(connector, version)?,
        })
    }

    fn path(&self, screen_id: i64, tail: &str) -> String {
        self.core.api(&format!("screens/{}/tabs{}", screen_id, tail))
    }

    /// Returns the tabs of a screen. With `project_key` set, only tabs with
    /// fields visible in that project are returned.
    ///
    /// `GET /rest/api/{v}/screens/{screenId}/tabs`
    pub async fn gets(
        &self,
        screen_id: i64,
        project_key: &str,
    ) -> Result<(Vec<ScreenTabScheme>, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;

        let mut query = QueryParams::new();
        query.add_non_empty("projectKey", project_key);

        self.core
            .fetch(Endpoint::get(self.path(screen_id, "")).query(query))
            .await
    }

    /// `POST /rest/api/{v}/screens/{screenId}/tabs`
    pub async fn create(
        &self,
        screen_id: i64,
        tab_name: &str,
    ) -> Result<(ScreenTabScheme, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(tab_name, ApiError::NoScreenTabName)?;

        let endpoint = Endpoint::post(self.path(screen_id, "")).json(&TabName { name: tab_name })?;
        self.core.fetch(endpoint).await
    }

    /// Renames a tab.
    ///
    /// `PUT /rest/api/{v}/screens/{screenId}/tabs/{tabId}`
    pub async fn update(
        &self,
        screen_id: i64,
        tab_id: i64,
        new_tab_name: &str,
    ) -> Result<(ScreenTabScheme, ResponseScheme)> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        require(new_tab_name, ApiError::NoScreenTabName)?;

        let endpoint = Endpoint::put(self.path(screen_id, &format!("/{}", tab_id)))
            .json(&TabName { name: new_tab_name })?;
        self.core.fetch(endpoint).await
    }

    /// `DELETE /rest/api/{v}/screens/{screenId}/tabs/{tabId}`
    pub async fn delete(&self, screen_id: i64, tab_id: i64) -> Result<ResponseScheme> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        self.core
            .execute(Endpoint::delete(self.path(screen_id, &format!("/{}", tab_id))))
            .await
    }

    /// Moves a tab to a zero-based position.
    ///
    /// `POST /rest/api/{v}/screens/{screenId}/tabs/{tabId}/move/{pos}`
    pub async fn move_to(&self, screen_id: i64, tab_id: i64, position: i64) -> Result<ResponseScheme> {
        require(&screen_id, ApiError::NoScreenId)?;
        require(&tab_id, ApiError::NoScreenTabId)?;
        self.core
            .execute(Endpoint::post(
                self.path(screen_id, &format!("/{}/move/{}", tab_id, position)),
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{http_error, MockConnector};
    use reqwest::Method;

    #[tokio::test]
    async fn test_gets() {
        for version in ["2", "3"] {
            let mock = MockConnector::responding(200, serde_json::json!([{"id": 10000, "name": "Fields Tab"}]));
            let service = ScreenTabService::new(mock.clone(), version).unwrap();

            let (tabs, _) = service.gets(10000, "").await.unwrap();

            assert_eq!(tabs[0].name, "Fields Tab");
            assert_eq!(mock.last_endpoint(), format!("rest/api/{}/screens/10000/tabs", version));
        }
    }

    #[tokio::test]
    async fn test_gets_with_project_key() {
        let mock = MockConnector::responding(200, serde_json::json!([]));
        let service = ScreenTabService::new(mock.clone(), "3").unwrap();

        service.gets(10000, "KP").await.unwrap();

        assert_eq!(mock.last_endpoint(), "rest/api/3/screens/10000/tabs?projectKey=KP");
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let mock = MockConnector::responding(200, serde_json::json!({"id": 10001, "name": "Tab A"}));
        let service = ScreenTabService::new(mock.clone(), "3").unwrap();

        let (tab, _) = service.create(10000, "Tab A").await.unwrap();
        assert_eq!(tab.id, 10001);
        assert_eq!(mock.last_method(), Method::POST);
        assert_eq!(mock.last_json(), serde_json::json!({"name": "Tab A"}));

        service.update(10000, 10001, "Tab B").await.unwrap();
        assert_eq!(mock.last_method(), Method::PUT);
        assert_eq!(mock.last_endpoint(), "rest/api/3/screens/10000/tabs/10001");
        assert_eq!(mock.last_json(), serde_json::json!({"name": "Tab B"}));
    }

    #[tokio::test]
    async fn test_delete_and_move() {
        let mock = MockConnector::no_content();
        let service = ScreenTabService::new(mock.clone(), "2").unwrap();

        service.delete(10000, 10001).await.unwrap();
        assert_eq!(mock.last_method(), Method::DELETE);
        assert_eq!(mock.last_endpoint(), "rest/api/2/screens/10000/tabs/10001");

        service.move_to(10000, 10001, 0).await.unwrap();
        assert_eq!(mock.last_method(), Method::POST);
        assert_eq!(mock.last_endpoint(), "rest/api/2/screens/10000/tabs/10001/move/0");
    }

    #[tokio::test]
    async fn test_required_inputs() {
        let mock = MockConnector::no_content();
        let service = ScreenTabService::new(mock.clone(), "3").unwrap();

        assert!(matches!(service.gets(0, "").await.unwrap_err(), ApiError::NoScreenId));
        assert!(matches!(service.create(10000, "").await.unwrap_err(), ApiError::NoScreenTabName));
        assert!(matches!(service.update(10000, 0, "Tab").await.unwrap_err(), ApiError::NoScreenTabId));
        assert!(matches!(service.update(10000, 10001, "").await.unwrap_err(), ApiError::NoScreenTabName));
        assert!(matches!(service.delete(10000, 0).await.unwrap_err(), ApiError::NoScreenTabId));
        assert!(matches!(service.move_to(0, 10001, 1).await.unwrap_err(), ApiError::NoScreenId));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_call_error_is_returned_unchanged() {
        let mock = MockConnector::failing_call(http_error(500, "boom"));
        let service = ScreenTabService::new(mock, "3").unwrap();

        let err = service.delete(10000, 10001).await.unwrap_err();

        assert!(err.is_retryable());
    }
}
