//! Jira REST API request and response types.
//!
//! Request payloads serialize to the JSON Jira expects; response schemes
//! mirror Jira's JSON and tolerate missing fields.

mod attachment;
mod bulk;
mod common;
mod field;
mod group;
mod notification;
mod screen;
mod team;
mod user;
mod workflow;
mod worklog;

pub use attachment::*;
pub use bulk::*;
pub use common::{AvatarUrls, Paginated, TaskScheme};
pub use field::*;
pub use group::*;
pub use notification::*;
pub use screen::*;
pub use team::*;
pub use user::*;
pub use workflow::*;
pub use worklog::*;
