//! Top-level error type for applications built on the SDK.
//!
//! Library calls return [`ApiError`] or [`ConfigError`]; [`AppError`]
//! joins them for the `jira-sdk` binary and adds messages fit for a
//! terminal.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::error::ApiError;
use crate::config::ConfigError;

const API_TOKEN_URL: &str = "https://id.atlassian.com/manage-profile/security/api-tokens";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// A message suitable for showing to users, without internals.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::ProfileNotFound(name) => format!("Profile '{}' not found.", name),
            },
            AppError::Api(e) => api_message(e),
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Errors that cannot be fixed by trying again.
    pub fn is_critical(&self) -> bool {
        match self {
            AppError::Config(_) => true,
            AppError::Api(e) => {
                e.status()
                    .is_some_and(|s| s == StatusCode::UNAUTHORIZED || s == StatusCode::FORBIDDEN)
                    || matches!(e, ApiError::Keyring(_) | ApiError::InvalidUrl(_))
            }
            _ => false,
        }
    }

    /// Errors where a later attempt may succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Api(e) => e.is_retryable() || e.is_not_found(),
            _ => false,
        }
    }

    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ProfileNotFound(_))
            | AppError::Config(ConfigError::ValidationError(_)) => Some(
                "Run 'jira-sdk profile add <name> --url <site> --email <email>' to configure a profile.",
            ),
            AppError::Api(ApiError::Keyring(_)) => {
                Some("Store a token with 'jira-sdk profile add --token' or set JIRA_API_TOKEN.")
            }
            AppError::Api(e) if e.is_unauthorized() => Some(API_TOKEN_URL),
            AppError::Api(e) if e.status() == Some(StatusCode::TOO_MANY_REQUESTS) => {
                Some("Wait a few seconds and try again, or raise max_retries in the config.")
            }
            AppError::Api(ApiError::Network(_)) | AppError::Api(ApiError::InvalidUrl(_)) => {
                Some("Check your internet connection and Jira URL.")
            }
            _ => None,
        }
    }
}

fn api_message(e: &ApiError) -> String {
    match e {
        ApiError::Http { status, message, .. } => match status.as_u16() {
            401 => "Authentication failed. Please check your email and API token.".to_string(),
            403 => "Access denied. You don't have permission to access this resource.".to_string(),
            404 => format!("Not found: {}", message),
            429 => "Too many requests. Please wait a moment and try again.".to_string(),
            500..=599 => "Jira server error. Please try again later.".to_string(),
            _ => format!("Jira rejected the request: {}", message),
        },
        ApiError::Network(_) => {
            "Connection failed. Please check your internet connection.".to_string()
        }
        ApiError::InvalidUrl(_) => "Invalid Jira URL in configuration.".to_string(),
        ApiError::Keyring(_) => {
            "Could not access secure storage. Please reconfigure your profile.".to_string()
        }
        ApiError::Decode { .. } => "Unexpected response from Jira.".to_string(),
        ApiError::Encode(_) | ApiError::InvalidHeader(_) => {
            format!("Could not build the request: {}", e)
        }
        precondition => format!("Missing input: {}", precondition),
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
