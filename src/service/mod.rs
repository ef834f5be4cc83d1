//! Typed services, one per Jira resource.
//!
//! Every operation checks its required inputs, builds the path for the
//! configured API version, encodes query and body, dispatches through the
//! [`Connector`] and decodes the result. Preconditions fail before any
//! request is built.

mod attachment;
mod bulk;
mod core;
mod field;
mod group;
mod myself;
mod notification;
mod screen;
mod team;
mod user;
mod workflow;
mod worklog;

use std::sync::Arc;

use crate::api::{Connector, Result};

pub use attachment::AttachmentService;
pub use bulk::BulkService;
pub use field::{FieldContextOptionService, FieldContextService, FieldService};
pub use group::GroupService;
pub use myself::MyselfService;
pub use notification::NotificationSchemeService;
pub use screen::{ScreenSchemeService, ScreenService, ScreenTabFieldService, ScreenTabService};
pub use team::TeamService;
pub use user::{UserSearchService, UserService};
pub use workflow::{WorkflowSchemeService, WorkflowService};
pub use worklog::WorklogService;

/// Every service, bound to one connector and API version.
#[derive(Debug, Clone)]
pub struct Jira {
    pub attachment: AttachmentService,
    pub bulk: BulkService,
    pub field: FieldService,
    pub group: GroupService,
    pub myself: MyselfService,
    pub notification_scheme: NotificationSchemeService,
    pub screen: ScreenService,
    pub team: TeamService,
    pub user: UserService,
    pub workflow: WorkflowService,
    pub worklog: WorklogService,
}

impl Jira {
    /// Build every service. Fails with `NoVersion` when `version` is empty.
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            attachment: AttachmentService::new(connector.clone(), version)?,
            bulk: BulkService::new(connector.clone(), version)?,
            field: FieldService::new(connector.clone(), version)?,
            group: GroupService::new(connector.clone(), version)?,
            myself: MyselfService::new(connector.clone(), version)?,
            notification_scheme: NotificationSchemeService::new(connector.clone(), version)?,
            screen: ScreenService::new(connector.clone(), version)?,
            team: TeamService::new(connector.clone(), version)?,
            user: UserService::new(connector.clone(), version)?,
            workflow: WorkflowService::new(connector.clone(), version)?,
            worklog: WorklogService::new(connector, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockConnector;
    use crate::api::ApiError;

    #[test]
    fn test_empty_version_is_rejected() {
        let err = Jira::new(MockConnector::no_content(), "").unwrap_err();
        assert!(matches!(err, ApiError::NoVersion));
    }

    #[tokio::test]
    async fn test_services_share_connector() {
        let mock = MockConnector::responding(200, serde_json::json!({"accountId": "1"}));
        let jira = Jira::new(mock.clone(), "2").unwrap();

        jira.myself.details(&[]).await.unwrap();
        jira.screen.tab.field.gets(10000, 10001).await.ok();
        jira.field.context.option.delete("customfield_1", 1, 2).await.unwrap();

        assert_eq!(mock.call_count(), 3);
        assert_eq!(
            mock.last_endpoint(),
            "rest/api/2/field/customfield_1/context/1/option/2"
        );
    }
}
