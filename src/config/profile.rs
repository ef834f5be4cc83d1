//! Connection profiles.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Connection details for one Jira Cloud site.
///
/// The API token is not part of the profile; it is kept in the OS keychain
/// under the profile name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Unique, whitespace-free profile name.
    pub name: String,
    /// Site URL, e.g. `https://company.atlassian.net`.
    pub url: String,
    /// Account email used for basic authentication.
    pub email: String,
}

impl Profile {
    pub fn new(name: String, url: String, email: String) -> Self {
        Self { name, url, email }
    }

    /// # Errors
    ///
    /// `ConfigError::ValidationError` when the name is empty or has
    /// whitespace, the URL is not http(s), or the email is malformed.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "profile name cannot be empty".to_string(),
            ));
        }

        if self.name.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "profile name '{}' cannot contain whitespace",
                self.name
            )));
        }

        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': URL cannot be empty",
                self.name
            )));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': URL must start with http:// or https://",
                self.name
            )));
        }

        if self.email.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': email cannot be empty",
                self.name
            )));
        }

        if !self.email.contains('@') {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': '{}' does not appear to be a valid email address",
                self.name, self.email
            )));
        }

        Ok(())
    }

    /// The site URL without a trailing slash.
    pub fn site(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
