//! Advanced Roadmaps teams.
//!
//! The teams API lives outside `/rest/api/{v}`; the version is still
//! required so every service is built the same way.

use std::sync::Arc;

use serde::Serialize;

use crate::api::{Connector, ResponseScheme, Result};
use crate::models::{JiraTeamCreatePayloadScheme, JiraTeamCreateResponseScheme, JiraTeamPageScheme};

use super::core::{Endpoint, ServiceCore};

const TEAMS_PATH: &str = "rest/teams/1.0/teams";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindTeams {
    max_results: i64,
}

#[derive(Debug, Clone)]
pub struct TeamService {
    core: ServiceCore,
}

impl TeamService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            core: ServiceCore::new(connector, version)?,
        })
    }

    /// Returns up to `max_results` teams with the people in them.
    ///
    /// `POST /rest/teams/1.0/teams/find`
    pub async fn gets(&self, max_results: i64) -> Result<(JiraTeamPageScheme, ResponseScheme)> {
        let endpoint = Endpoint::post(format!("{}/find", TEAMS_PATH))
            .json(&FindTeams { max_results })?;
        self.core.fetch(endpoint).await
    }

    /// Creates a team.
    ///
    /// `POST /rest/teams/1.0/teams/create`
    pub async fn create(
        &self,
        payload: &JiraTeamCreatePayloadScheme,
    ) -> Result<(JiraTeamCreateResponseScheme, ResponseScheme)> {
        let endpoint = Endpoint::post(format!("{}/create", TEAMS_PATH)).json(payload)?;
        self.core.fetch(endpoint).await
    }
}
