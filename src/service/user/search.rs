use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{UserPermissionCheckParamsScheme, UserScheme};
use crate::service::core::{require, Endpoint, ServiceCore};

/// User lookups by query, project assignability and permission.
#[derive(Debug, Clone)]
pub struct UserSearchService {
    core: ServiceCore,
}

impl UserSearchService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Returns users assignable to issues in all of the given projects.
    ///
    /// `GET /rest/api/{v}/user/assignable/multiProjectSearch`
    pub async fn projects(
        &self,
        account_id: &str,
        project_keys: &[String],
        start_at: i64,
        max_results: i64,
    ) -> Result<(Vec<UserScheme>, ResponseScheme)> {
        require(project_keys, ApiError::NoProjectKeys)?;

        let mut query = QueryParams::new();
        query
            .add_page(start_at, max_results)
            .add_non_empty("accountId", account_id)
            .add_joined("projectKeys", project_keys);

        self.core
            .fetch(
                Endpoint::get(self.core.api("user/assignable/multiProjectSearch")).query(query),
            )
            .await
    }

    /// Returns users matching `query` against display name and email, or
    /// the user with `account_id`.
    ///
    /// `GET /rest/api/{v}/user/search`
    pub async fn search(
        &self,
        account_id: &str,
        query: &str,
        start_at: i64,
        max_results: i64,
    ) -> Result<(Vec<UserScheme>, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add_page(start_at, max_results)
            .add_non_empty("accountId", account_id)
            .add_non_empty("query", query);

        self.core
            .fetch(Endpoint::get(self.core.api("user/search")).query(params))
            .await
    }

    /// Returns users holding a permission, globally or for an issue or
    /// project.
    ///
    /// `GET /rest/api/{v}/user/permission/search`
    pub async fn check(
        &self,
        permission: &str,
        options: Option<&UserPermissionCheckParamsScheme>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(Vec<UserScheme>, ResponseScheme)> {
        require(permission, ApiError::NoPermission)?;

        let mut query = QueryParams::new();
        query
            .add_page(start_at, max_results)
            .add("permissions", permission);

        if let Some(options) = options {
            query
                .add_non_empty("query", &options.query)
                .add_non_empty("accountId", &options.account_id)
                .add_non_empty("issueKey", &options.issue_key)
                .add_non_empty("projectKey", &options.project_key);
        }

        self.core
            .fetch(Endpoint::get(self.core.api("user/permission/search")).query(query))
            .await
    }
}
