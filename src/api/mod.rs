//! Jira API transport: connector trait, reqwest client, auth and errors.
//!
//! This module provides the interface for communicating with the Jira REST API.
//! Resource services in [`crate::service`] build on top of it.

pub mod auth;
mod client;
mod connector;
pub mod error;
mod query;

#[cfg(test)]
pub(crate) mod mock;

pub use auth::Auth;
pub use client::{ClientConfig, JiraClient, DEFAULT_TIMEOUT_SECS};
pub use connector::{Connector, Request, RequestBody, ResponseScheme};
pub use error::{ApiError, Result};
pub use query::{with_query, QueryParams};
