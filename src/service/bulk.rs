//! Bulk issue operations.
//!
//! Jira queues bulk work and answers with a task ID; poll [`BulkService::progress`]
//! until the task finishes.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiError, Connector, ResponseScheme, Result};
use crate::models::{BulkDeletePayload, BulkTaskProgressScheme, BulkTaskScheme};

use super::core::{require, Endpoint, ServiceCore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectedIssues<'a> {
    selected_issue_ids_or_keys: &'a [String],
}

#[derive(Debug, Clone)]
pub struct BulkService {
    core: ServiceCore,
}

impl BulkService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Submits a bulk delete of up to 1,000 issues.
    ///
    /// `POST /rest/api/{v}/bulk/issues/delete`
    pub async fn delete(
        &self,
        payload: &BulkDeletePayload,
    ) -> Result<(BulkTaskScheme, ResponseScheme)> {
        require(&payload.selected_issue_ids_or_keys, ApiError::NoIssueKeysOrIds)?;
        let endpoint = Endpoint::post(self.core.api("bulk/issues/delete")).json(payload)?;
        self.core.fetch(endpoint).await
    }

    /// Submits a bulk watch for the current user.
    ///
    /// `POST /rest/api/{v}/bulk/issues/watch`
    pub async fn watch(&self, issue_keys_or_ids: &[String]) -> Result<(BulkTaskScheme, ResponseScheme)> {
        self.selection("bulk/issues/watch", issue_keys_or_ids).await
    }

    /// Submits a bulk unwatch for the current user.
    ///
    /// `POST /rest/api/{v}/bulk/issues/unwatch`
    pub async fn unwatch(
        &self,
        issue_keys_or_ids: &[String],
    ) -> Result<(BulkTaskScheme, ResponseScheme)> {
        self.selection("bulk/issues/unwatch", issue_keys_or_ids).await
    }

    /// Returns the progress of a bulk task.
    ///
    /// `GET /rest/api/{v}/bulk/queue/{taskId}`
    pub async fn progress(&self, task_id: &str) -> Result<(BulkTaskProgressScheme, ResponseScheme)> {
        require(task_id, ApiError::NoTaskId)?;
        self.core
            .fetch(Endpoint::get(self.core.api(&format!("bulk/queue/{}", task_id))))
            .await
    }

    async fn selection(
        &self,
        tail: &str,
        issue_keys_or_ids: &[String],
    ) -> Result<(BulkTaskScheme, ResponseScheme)> {
        require(issue_keys_or_ids, ApiError::NoIssueKeysOrIds)?;
        let endpoint = Endpoint::post(self.core.api(tail)).json(&SelectedIssues {
            selected_issue_ids_or_keys: issue_keys_or_ids,
        })?;
        self.core.fetch(endpoint).await
    }
}
