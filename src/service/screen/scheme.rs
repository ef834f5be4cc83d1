//! Screen schemes: which screen is shown for create, edit and view.

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    ScreenSchemePageScheme, ScreenSchemeParamsScheme, ScreenSchemePayloadScheme,
    ScreenSchemeScheme,
};
use crate::service::core::{require, Endpoint, ServiceCore};

#[derive(Debug, Clone)]
pub struct ScreenSchemeService {
    core: ServiceCore,
}

impl ScreenSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Returns a page of screen schemes.
    ///
    /// `GET /rest/api/{v}/screenscheme`
    pub async fn gets(
        &self,
        options: Option<&ScreenSchemeParamsScheme>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(ScreenSchemePageScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_repeated("id", &options.ids)
                .add_non_empty("queryString", &options.query_string)
                .add_non_empty("orderBy", &options.order_by)
                .add_joined("expand", &options.expand);
        }

        self.core
            .fetch(Endpoint::get(self.core.api("screenscheme")).query(query))
            .await
    }

    /// Creates a screen scheme.
    ///
    /// `POST /rest/api/{v}/screenscheme`
    pub async fn create(
        &self,
        payload: &ScreenSchemePayloadScheme,
    ) -> Result<(ScreenSchemeScheme, ResponseScheme)> {
        require(&payload.name, ApiError::NoScreenSchemeName)?;
        let endpoint = Endpoint::post(self.core.api("screenscheme")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Updates a screen scheme. Only the set values change.
    ///
    /// `PUT /rest/api/{v}/screenscheme/{id}`
    pub async fn update(
        &self,
        screen_scheme_id: &str,
        payload: &ScreenSchemePayloadScheme,
    ) -> Result<ResponseScheme> {
        require(screen_scheme_id, ApiError::NoScreenSchemeId)?;
        let endpoint = Endpoint::put(
            self.core
                .api(&format!("screenscheme/{}", screen_scheme_id)),
        )
        .json(payload)?;
        self.core.execute(endpoint).await
    }

    /// Deletes a screen scheme that no issue type screen scheme uses.
    ///
    /// `DELETE /rest/api/{v}/screenscheme/{id}`
    pub async fn delete(&self, screen_scheme_id: &str) -> Result<ResponseScheme> {
        require(screen_scheme_id, ApiError::NoScreenSchemeId)?;
        self.core
            .execute(Endpoint::delete(
                self.core
                    .api(&format!("screenscheme/{}", screen_scheme_id)),
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{http_error, MockConnector};
    use crate::models::ScreenTypesScheme;
    use reqwest::Method;

    #[tokio::test]
    async fn test_gets() {
        for version in ["2", "3"] {
            let mock = MockConnector::responding(
                200,
                serde_json::json!({"values": [{"id": 10010, "name": "Employee screen scheme", "screens": {"default": 10017, "edit": 10019}}]}),
            );
            let service = ScreenSchemeService::new(mock.clone(), version).unwrap();

            let options = ScreenSchemeParamsScheme {
                ids: vec![10010],
                query_string: "Employee".to_string(),
                order_by: String::new(),
                expand: vec!["issueTypeScreenSchemes".to_string()],
            };
            let (page, _) = service.gets(Some(&options), 0, 50).await.unwrap();

            assert_eq!(page.values[0].screens.as_ref().unwrap().edit, 10019);
            assert_eq!(
                mock.last_endpoint(),
                format!(
                    "rest/api/{}/screenscheme?expand=issueTypeScreenSchemes&id=10010&maxResults=50&queryString=Employee&startAt=0",
                    version
                )
            );
        }
    }

    #[tokio::test]
    async fn test_create() {
        let mock = MockConnector::responding(201, serde_json::json!({"id": 10001}));
        let service = ScreenSchemeService::new(mock.clone(), "3").unwrap();

        let payload = ScreenSchemePayloadScheme {
            name: "Employee screen scheme".to_string(),
            description: String::new(),
            screens: Some(ScreenTypesScheme {
                default: 10017,
                edit: 10019,
                ..Default::default()
            }),
        };
        let (scheme, _) = service.create(&payload).await.unwrap();

        assert_eq!(scheme.id, 10001);
        assert_eq!(mock.last_method(), Method::POST);
        assert_eq!(
            mock.last_json(),
            serde_json::json!({
                "name": "Employee screen scheme",
                "screens": {"default": 10017, "edit": 10019}
            })
        );
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let mock = MockConnector::no_content();
        let service = ScreenSchemeService::new(mock.clone(), "3").unwrap();

        let err = service
            .create(&ScreenSchemePayloadScheme::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NoScreenSchemeName));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mock = MockConnector::no_content();
        let service = ScreenSchemeService::new(mock.clone(), "3").unwrap();

        let payload = ScreenSchemePayloadScheme {
            description: "updated".to_string(),
            ..Default::default()
        };
        service.update("10001", &payload).await.unwrap();
        assert_eq!(mock.last_method(), Method::PUT);
        assert_eq!(mock.last_endpoint(), "rest/api/3/screenscheme/10001");
        assert_eq!(mock.last_json(), serde_json::json!({"description": "updated"}));

        service.delete("10001").await.unwrap();
        assert_eq!(mock.last_method(), Method::DELETE);
        assert_eq!(mock.last_endpoint(), "rest/api/3/screenscheme/10001");
    }

    #[tokio::test]
    async fn test_scheme_id_is_required() {
        let mock = MockConnector::no_content();
        let service = ScreenSchemeService::new(mock.clone(), "3").unwrap();

        assert!(matches!(
            service.update("", &ScreenSchemePayloadScheme::default()).await.unwrap_err(),
            ApiError::NoScreenSchemeId
        ));
        assert!(matches!(service.delete("").await.unwrap_err(), ApiError::NoScreenSchemeId));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_call_error_is_returned_unchanged() {
        let mock = MockConnector::failing_call(http_error(400, "scheme in use"));
        let service = ScreenSchemeService::new(mock, "3").unwrap();

        let err = service.delete("10001").await.unwrap_err();

        assert!(err.to_string().contains("scheme in use"));
    }
}
