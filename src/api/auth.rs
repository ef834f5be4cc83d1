//! Authentication for the Jira API.
//!
//! Jira Cloud accepts Basic auth (account email + API token) and Bearer
//! tokens (OAuth 2.0 access tokens). API tokens can be kept in the OS
//! keyring, keyed by profile name.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::error::{ApiError, Result};

/// The keyring service name for stored API tokens.
const KEYRING_SERVICE: &str = "jira-sdk";

/// Environment variable that overrides the keyring lookup.
pub const TOKEN_ENV_VAR: &str = "JIRA_API_TOKEN";

/// Authentication credentials for Jira.
///
/// Only the encoded header value is retained; `Debug` never prints it.
#[derive(Clone)]
pub struct Auth {
    /// Who the credentials belong to (email for Basic, empty for Bearer).
    principal: String,
    /// The complete `Authorization` header value.
    header_value: String,
}

impl Auth {
    /// Basic auth from an account email and API token.
    pub fn basic(email: &str, token: &str) -> Self {
        Self {
            principal: email.to_string(),
            header_value: build_basic_header(email, token),
        }
    }

    /// Bearer auth from an OAuth 2.0 access token.
    pub fn bearer(token: &str) -> Self {
        Self {
            principal: String::new(),
            header_value: format!("Bearer {}", token),
        }
    }

    /// Basic auth for a profile, with the token taken from `JIRA_API_TOKEN`
    /// when set and from the OS keyring otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source has a token.
    pub fn for_profile(profile_name: &str, email: &str) -> Result<Self> {
        let token = match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => token,
            _ => get_token(profile_name)?,
        };
        Ok(Self::basic(email, &token))
    }

    /// The `Authorization` header value.
    pub fn header_value(&self) -> &str {
        &self.header_value
    }

    /// The account email, empty for Bearer credentials.
    pub fn principal(&self) -> &str {
        &self.principal
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.header_value.split(' ').next().unwrap_or_default();
        f.debug_struct("Auth")
            .field("principal", &self.principal)
            .field("scheme", &scheme)
            .finish()
    }
}

/// Encode "email:token" in Base64 and prepend "Basic ".
fn build_basic_header(email: &str, token: &str) -> String {
    let credentials = format!("{}:{}", email, token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}

fn entry(profile_name: &str) -> Result<keyring::Entry> {
    keyring::Entry::new(KEYRING_SERVICE, profile_name)
        .map_err(|e| ApiError::Keyring(format!("failed to access keyring: {}", e)))
}

/// Store an API token in the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be stored in the keyring.
pub fn store_token(profile_name: &str, token: &str) -> Result<()> {
    entry(profile_name)?
        .set_password(token)
        .map_err(|e| ApiError::Keyring(format!("failed to store token: {}", e)))
}

/// Retrieve an API token from the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be retrieved from the keyring.
pub fn get_token(profile_name: &str) -> Result<String> {
    entry(profile_name)?
        .get_password()
        .map_err(|e| ApiError::Keyring(format!("failed to retrieve token: {}", e)))
}

/// Delete an API token from the OS keyring.
pub fn delete_token(profile_name: &str) -> Result<()> {
    entry(profile_name)?
        .delete_password()
        .map_err(|e| ApiError::Keyring(format!("failed to delete token: {}", e)))
}

/// Check if a token exists in the OS keyring for a profile.
pub fn has_token(profile_name: &str) -> bool {
    get_token(profile_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_build_basic_header() {
        let header = build_basic_header("user@example.com", "api_token_here");
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, "user@example.com:api_token_here");
    }

    #[test]
    fn test_bearer_header() {
        let auth = Auth::bearer("oauth-access");
        assert_eq!(auth.header_value(), "Bearer oauth-access");
        assert_eq!(auth.principal(), "");
    }

    #[test]
    fn test_debug_does_not_expose_token() {
        let auth = Auth::basic("user@example.com", "secret_token");
        let debug_output = format!("{:?}", auth);
        assert!(!debug_output.contains("secret_token"));
        assert!(!debug_output.contains(auth.header_value()));
        assert!(debug_output.contains("Basic"));
    }

    #[test]
    #[serial]
    fn test_for_profile_prefers_environment() {
        std::env::set_var(TOKEN_ENV_VAR, "env-token");
        let auth = Auth::for_profile("work", "me@company.com").unwrap();
        std::env::remove_var(TOKEN_ENV_VAR);

        assert_eq!(
            auth.header_value(),
            build_basic_header("me@company.com", "env-token")
        );
    }
}
