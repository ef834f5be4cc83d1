//! A typed client for the Jira Cloud REST API.
//!
//! ```no_run
//! use std::sync::Arc;
//! use jira_sdk::{Jira, JiraClient};
//!
//! # async fn run() -> jira_sdk::api::Result<()> {
//! let client = JiraClient::with_credentials("https://company.atlassian.net", "me@company.com", "token")?;
//! let jira = Jira::new(Arc::new(client), "3")?;
//!
//! let (me, response) = jira.myself.details(&[]).await?;
//! println!("{} ({})", me.display_name, response.status);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation returns the decoded value together with the
//! [`ResponseScheme`](api::ResponseScheme) it came from. Errors carry the
//! response too when Jira answered.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;

pub use api::{ApiError, Auth, ClientConfig, Connector, JiraClient, ResponseScheme};
pub use config::{Config, ConfigError, Profile, Settings};
pub use error::AppError;
pub use service::Jira;
