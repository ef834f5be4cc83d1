//! Issue attachments.

use std::sync::Arc;

use crate::api::{ApiError, Connector, QueryParams, ResponseScheme, Result};
use crate::models::{
    AttachmentHumanMetadataScheme, AttachmentMetadataScheme, AttachmentScheme,
    AttachmentSettingScheme,
};

use super::core::{require, Endpoint, ServiceCore};

/// Attachment settings, metadata, upload, download and removal.
#[derive(Debug, Clone)]
pub struct AttachmentService {
    core: ServiceCore,
}

impl AttachmentService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Returns the attachment settings: whether attachments are enabled and
    /// the maximum upload size.
    ///
    /// `GET /rest/api/{v}/attachment/meta`
    pub async fn settings(&self) -> Result<(AttachmentSettingScheme, ResponseScheme)> {
        self.core
            .fetch(Endpoint::get(self.core.api("attachment/meta")))
            .await
    }

    /// Returns the metadata for an attachment. The attachment itself is not
    /// returned.
    ///
    /// `GET /rest/api/{v}/attachment/{id}`
    pub async fn metadata(
        &self,
        attachment_id: &str,
    ) -> Result<(AttachmentMetadataScheme, ResponseScheme)> {
        require(attachment_id, ApiError::NoAttachmentId)?;
        self.core
            .fetch(Endpoint::get(
                self.core.api(&format!("attachment/{}", attachment_id)),
            ))
            .await
    }

    /// Returns the contents of an archive attachment, with sizes in
    /// human-readable form.
    ///
    /// `GET /rest/api/{v}/attachment/{id}/expand/human`
    pub async fn human(
        &self,
        attachment_id: &str,
    ) -> Result<(AttachmentHumanMetadataScheme, ResponseScheme)> {
        require(attachment_id, ApiError::NoAttachmentId)?;
        self.core
            .fetch(Endpoint::get(
                self.core
                    .api(&format!("attachment/{}/expand/human", attachment_id)),
            ))
            .await
    }

    /// Deletes an attachment from an issue.
    ///
    /// `DELETE /rest/api/{v}/attachment/{id}`
    pub async fn delete(&self, attachment_id: &str) -> Result<ResponseScheme> {
        require(attachment_id, ApiError::NoAttachmentId)?;
        self.core
            .execute(Endpoint::delete(
                self.core.api(&format!("attachment/{}", attachment_id)),
            ))
            .await
    }

    /// Downloads the attachment content. The bytes are in the returned
    /// response.
    ///
    /// With `redirect` false Jira streams the content directly instead of
    /// answering with a redirect to the media service.
    ///
    /// `GET /rest/api/{v}/attachment/content/{id}`
    pub async fn download(&self, attachment_id: &str, redirect: bool) -> Result<ResponseScheme> {
        require(attachment_id, ApiError::NoAttachmentId)?;

        let mut query = QueryParams::new();
        query.add_bool("redirect", redirect);

        self.core
            .execute(
                Endpoint::get(
                    self.core
                        .api(&format!("attachment/content/{}", attachment_id)),
                )
                .query(query),
            )
            .await
    }

    /// Uploads a file to an issue.
    ///
    /// `POST /rest/api/{v}/issue/{issueIdOrKey}/attachments`
    pub async fn add(
        &self,
        issue_key_or_id: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(Vec<AttachmentScheme>, ResponseScheme)> {
        require(issue_key_or_id, ApiError::NoIssueKeyOrId)?;
        require(file_name, ApiError::NoFilename)?;
        require(content, ApiError::NoReader)?;

        let endpoint = Endpoint::post(
            self.core
                .api(&format!("issue/{}/attachments", issue_key_or_id)),
        )
        .multipart(file_name, content);

        self.core.fetch(endpoint).await
    }
}
