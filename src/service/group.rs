//! Groups and group membership.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{BulkGroupScheme, GroupBulkOptionsScheme, GroupMemberPageScheme, GroupScheme};

use super::core::{require, Endpoint, ServiceCore};

#[derive(Serialize)]
struct GroupName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountId<'a> {
    account_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct GroupService {
    core: ServiceCore,
}

impl GroupService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Creates a group.
    ///
    /// `POST /rest/api/{v}/group`
    pub async fn create(&self, group_name: &str) -> Result<(GroupScheme, ResponseScheme)> {
        require(group_name, ApiError::NoGroupName)?;
        let endpoint =
            Endpoint::post(self.core.api("group")).json(&GroupName { name: group_name })?;
        self.core.fetch(endpoint).await
    }

    /// Deletes a group.
    ///
    /// `DELETE /rest/api/{v}/group`
    pub async fn delete(&self, group_name: &str) -> Result<ResponseScheme> {
        require(group_name, ApiError::NoGroupName)?;

        let mut query = QueryParams::new();
        query.add("groupname", group_name);

        self.core
            .execute(Endpoint::delete(self.core.api("group")).query(query))
            .await
    }

    /// Returns a page of groups, optionally restricted by ID or name.
    ///
    /// `GET /rest/api/{v}/group/bulk`
    pub async fn bulk(
        &self,
        options: Option<&GroupBulkOptionsScheme>,
        start_at: i64,
        max_results: i64,
    ) -> Result<(BulkGroupScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_page(start_at, max_results);

        if let Some(options) = options {
            query
                .add_repeated("groupId", &options.group_ids)
                .add_repeated("groupName", &options.group_names);
        }

        self.core
            .fetch(Endpoint::get(self.core.api("group/bulk")).query(query))
            .await
    }

    /// Returns a page of a group's members.
    ///
    /// `GET /rest/api/{v}/group/member`
    pub async fn members(
        &self,
        group_name: &str,
        include_inactive_users: bool,
        start_at: i64,
        max_results: i64,
    ) -> Result<(GroupMemberPageScheme, ResponseScheme)> {
        require(group_name, ApiError::NoGroupName)?;

        let mut query = QueryParams::new();
        query
            .add_page(start_at, max_results)
            .add("groupname", group_name)
            .add_bool("includeInactiveUsers", include_inactive_users);

        self.core
            .fetch(Endpoint::get(self.core.api("group/member")).query(query))
            .await
    }

    /// Adds a user to a group.
    ///
    /// `POST /rest/api/{v}/group/user`
    pub async fn add(
        &self,
        group_name: &str,
        account_id: &str,
    ) -> Result<(GroupScheme, ResponseScheme)> {
        require(group_name, ApiError::NoGroupName)?;
        require(account_id, ApiError::NoAccountId)?;

        let mut query = QueryParams::new();
        query.add("groupname", group_name);

        let endpoint = Endpoint::post(self.core.api("group/user"))
            .query(query)
            .json(&AccountId { account_id })?;
        self.core.fetch(endpoint).await
    }

    /// Removes a user from a group.
    ///
    /// `DELETE /rest/api/{v}/group/user`
    pub async fn remove(&self, group_name: &str, account_id: &str) -> Result<ResponseScheme> {
        require(group_name, ApiError::NoGroupName)?;
        require(account_id, ApiError::NoAccountId)?;

        let mut query = QueryParams::new();
        query
            .add("accountId", account_id)
            .add("groupname", group_name);

        self.core
            .execute(Endpoint::delete(self.core.api("group/user")).query(query))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{http_error, MockConnector};
    use reqwest::Method;

    #[tokio::test]
    async fn test_create() {
        for version in ["2", "3"] {
            let mock = MockConnector::responding(201, serde_json::json!({"name": "power-users", "groupId": "276f955c"}));
            let service = GroupService::new(mock.clone(), version).unwrap();

            let (group, _) = service.create("power-users").await.unwrap();

            assert_eq!(group.group_id, "276f955c");
            assert_eq!(mock.last_method(), Method::POST);
            assert_eq!(mock.last_endpoint(), format!("rest/api/{}/group", version));
            assert_eq!(mock.last_json(), serde_json::json!({"name": "power-users"}));
        }
    }

    #[tokio::test]
    async fn test_delete_encodes_name() {
        let mock = MockConnector::no_content();
        let service = GroupService::new(mock.clone(), "3").unwrap();

        service.delete("jira administrators").await.unwrap();

        assert_eq!(mock.last_method(), Method::DELETE);
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/3/group?groupname=jira+administrators"
        );
    }

    #[tokio::test]
    async fn test_group_name_is_required() {
        let mock = MockConnector::no_content();
        let service = GroupService::new(mock.clone(), "3").unwrap();

        assert!(matches!(service.create("").await.unwrap_err(), ApiError::NoGroupName));
        assert!(matches!(service.delete("").await.unwrap_err(), ApiError::NoGroupName));
        assert!(matches!(service.members("", false, 0, 50).await.unwrap_err(), ApiError::NoGroupName));
        assert!(matches!(service.add("", "").await.unwrap_err(), ApiError::NoGroupName));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_bulk() {
        let mock = MockConnector::responding(
            200,
            serde_json::json!({"maxResults": 10, "startAt": 0, "total": 1, "isLast": true, "values": [{"name": "jdog-developers", "groupId": "276f955c"}]}),
        );
        let service = GroupService::new(mock.clone(), "2").unwrap();

        let options = GroupBulkOptionsScheme {
            group_ids: vec!["276f955c".to_string()],
            group_names: vec!["jdog-developers".to_string(), "juvenal-developers".to_string()],
        };
        let (page, _) = service.bulk(Some(&options), 0, 10).await.unwrap();

        assert_eq!(page.values[0].name, "jdog-developers");
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/2/group/bulk?groupId=276f955c&groupName=jdog-developers&groupName=juvenal-developers&maxResults=10&startAt=0"
        );
    }

    #[tokio::test]
    async fn test_members() {
        let mock = MockConnector::responding(200, serde_json::json!({"values": [{"accountId": "5b10a2844c20165700ede21g"}]}));
        let service = GroupService::new(mock.clone(), "3").unwrap();

        let (page, _) = service.members("jira-users", true, 0, 100).await.unwrap();

        assert_eq!(page.values[0].account_id, "5b10a2844c20165700ede21g");
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/3/group/member?groupname=jira-users&includeInactiveUsers=true&maxResults=100&startAt=0"
        );
    }

    #[tokio::test]
    async fn test_add() {
        let mock = MockConnector::responding(201, serde_json::json!({"name": "jira-users"}));
        let service = GroupService::new(mock.clone(), "3").unwrap();

        service.add("jira-users", "5b10a2844c20165700ede21g").await.unwrap();

        assert_eq!(mock.last_method(), Method::POST);
        assert_eq!(mock.last_endpoint(), "rest/api/3/group/user?groupname=jira-users");
        assert_eq!(
            mock.last_json(),
            serde_json::json!({"accountId": "5b10a2844c20165700ede21g"})
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let mock = MockConnector::no_content();
        let service = GroupService::new(mock.clone(), "2").unwrap();

        service.remove("jira-users", "5b10a2844c20165700ede21g").await.unwrap();

        assert_eq!(mock.last_method(), Method::DELETE);
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/2/group/user?accountId=5b10a2844c20165700ede21g&groupname=jira-users"
        );
    }

    #[tokio::test]
    async fn test_account_id_is_required() {
        let mock = MockConnector::no_content();
        let service = GroupService::new(mock.clone(), "3").unwrap();

        assert!(matches!(service.add("jira-users", "").await.unwrap_err(), ApiError::NoAccountId));
        assert!(matches!(service.remove("jira-users", "").await.unwrap_err(), ApiError::NoAccountId));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_remove_surfaces_call_error() {
        let mock = MockConnector::failing_call(http_error(401, "unauthorized"));
        let service = GroupService::new(mock, "3").unwrap();

        let err = service.remove("jira-users", "5b10").await.unwrap_err();

        assert!(err.is_unauthorized());
    }
}
