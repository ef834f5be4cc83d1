use std::sync::Arc;

use crate::api::{Connector, QueryParams, ResponseScheme, Result};
use crate::models::UserScheme;

use super::core::{Endpoint, ServiceCore};

/// The authenticated user.
#[derive(Debug, Clone)]
pub struct MyselfService {
    core: ServiceCore,
}

impl MyselfService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Returns details of the user the connector authenticates as.
    /// `expand` accepts `groups` and `applicationRoles`.
    ///
    /// `GET /rest/api/{v}/myself`
    pub async fn details(&self, expand: &[String]) -> Result<(UserScheme, ResponseScheme)> {
        let mut query = QueryParams::new();
        query.add_joined("expand", expand);

        self.core
            .fetch(Endpoint::get(self.core.api("myself")).query(query))
            .await
    }
}
