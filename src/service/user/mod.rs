//! Users, and user search.

mod search;

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{UserGroupScheme, UserPayloadScheme, UserScheme, UserSearchPageScheme};

use super::core::{require, Endpoint, ServiceCore};

pub use search::UserSearchService;

#[derive(Debug, Clone)]
pub struct UserService {
    core: ServiceCore,
    pub search: UserSearchService,
}

impl UserService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector.clone(), version)?,
            search: UserSearchService::new(connector, version)?,
        })
    }

    /// Returns a user.
    ///
    /// `GET /rest/api/{v}/user`
    pub async fn get(&self, account_id: &str, expand: &[String]) -> Result<(UserScheme, ResponseScheme)> {
        require(account_id, ApiError::NoAccountId)?;

        let mut query = QueryParams::new();
        query
            .add("accountId", account_id)
            .add_joined("expand", expand);

        self.core
            .fetch(Endpoint::get(self.core.api("user")).query(query))
            .await
    }

    /// Creates a user. Jira sends an invitation to the email address.
    ///
    /// `POST /rest/api/{v}/user`
    pub async fn create(&self, payload: &UserPayloadScheme) -> Result<(UserScheme, ResponseScheme)> {
        let endpoint = Endpoint::post(self.core.api("user")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Deletes a user.
    ///
    /// `DELETE /rest/api/{v}/user`
    pub async fn delete(&self, account_id: &str) -> Result<ResponseScheme> {
        require(account_id, ApiError::NoAccountId)?;

        let mut query = QueryParams::new();
        query.add("accountId", account_id);

        self.core
            .execute(Endpoint::delete(self.core.api("user")).query(query))
            .await
    }

    /// Returns a page of the given users.
    ///
    /// `GET /rest/api/{v}/user/bulk`
    pub async fn find(
        &self,
        account_ids: &[String],
        start_at: i64,
        max_results: i64,
    ) -> Result<(UserSearchPageScheme, ResponseScheme)> {
        require(account_ids, ApiError::NoAccountId)?;

        let mut query = QueryParams::new();
        query
            .add_page(start_at, max_results)
            .add_repeated("accountId", account_ids);

        self.core
            .fetch(Endpoint::get(self.core.api("user/bulk")).query(query))
            .await
    }

    /// Returns the groups a user belongs to.
    ///
    /// `GET /rest/api/{v}/user/groups`
    pub async fn groups(&self, account_id: &str) -> Result<(Vec<UserGroupScheme>, ResponseScheme)> {
        require(account_id, ApiError::NoAccountId)?;

        let mut query = QueryParams::new();
        query.add("accountId", account_id);

        self.core
            .fetch(Endpoint::get(self.core.api("user/groups")).query(query))
            .await
    }

    /// Returns all users, including inactive and app users.
    ///
    /// `GET /rest/api/{v}/users/search`
    pub async fn gets(&self, start_at: i64, max_results: i64) -> Result<(Vec<UserScheme>, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        self.core
            .fetch(Endpoint::get(self.core.api("users/search")).query(query))
            .await
    }
}
