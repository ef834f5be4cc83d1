//! API error types for the Jira client.
//!
//! Precondition sentinels are raised before any I/O. Everything else comes
//! from the connector or from (de)serialization and is returned unchanged.

use reqwest::StatusCode;
use thiserror::Error;

use super::connector::ResponseScheme;

/// Errors that can occur when interacting with the Jira API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A service was constructed without an API version.
    #[error("no version provided")]
    NoVersion,

    #[error("no field ID provided")]
    NoFieldId,

    #[error("no field context ID provided")]
    NoFieldContextId,

    #[error("no field context option ID provided")]
    NoContextOptionId,

    #[error("no issue key or ID provided")]
    NoIssueKeyOrId,

    #[error("no issue keys or IDs provided")]
    NoIssueKeysOrIds,

    #[error("no attachment ID provided")]
    NoAttachmentId,

    #[error("no file name provided")]
    NoFilename,

    /// The attachment content was empty.
    #[error("no reader provided")]
    NoReader,

    #[error("no task ID provided")]
    NoTaskId,

    #[error("no group name provided")]
    NoGroupName,

    #[error("no account ID provided")]
    NoAccountId,

    #[error("no issue type IDs provided")]
    NoIssueTypes,

    #[error("no project IDs provided")]
    NoProjects,

    #[error("no project ID provided")]
    NoProjectId,

    #[error("no project keys provided")]
    NoProjectKeys,

    #[error("no permission provided")]
    NoPermission,

    #[error("no screen ID provided")]
    NoScreenId,

    #[error("no screen name provided")]
    NoScreenName,

    #[error("no screen tab ID provided")]
    NoScreenTabId,

    #[error("no screen tab name provided")]
    NoScreenTabName,

    #[error("no screen scheme ID provided")]
    NoScreenSchemeId,

    #[error("no screen scheme name provided")]
    NoScreenSchemeName,

    #[error("no workflow ID provided")]
    NoWorkflowId,

    #[error("no workflow scheme ID provided")]
    NoWorkflowSchemeId,

    #[error("no worklog IDs provided")]
    NoWorklogs,

    #[error("no worklog ID provided")]
    NoWorklogId,

    #[error("no notification scheme ID provided")]
    NoNotificationSchemeId,

    #[error("no notification ID provided")]
    NoNotificationId,

    /// Jira answered with a non-2xx status.
    ///
    /// The full response is kept so callers can inspect the status, headers
    /// and raw body.
    #[error("HTTP {status}: {message}")]
    Http {
        status: StatusCode,
        message: String,
        response: Box<ResponseScheme>,
    },

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value could not be built.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The request payload could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Box<ResponseScheme>,
    },

    /// Keyring error when storing/retrieving tokens.
    #[error("Keyring error: {0}")]
    Keyring(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from a non-2xx response.
    pub fn from_response(response: ResponseScheme, message: &str) -> Self {
        let status = response.status;
        let message = match status.as_u16() {
            401 => "authentication failed: check your email and API token".to_string(),
            403 if message.is_empty() => "permission denied".to_string(),
            404 if message.is_empty() => format!("resource not found: {}", response.endpoint),
            429 => "rate limited: please wait before retrying".to_string(),
            _ if message.is_empty() => response.endpoint.clone(),
            _ => message.to_string(),
        };

        ApiError::Http {
            status,
            message,
            response: Box::new(response),
        }
    }

    /// The HTTP status, when the error came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Decode { response, .. } => Some(response.status),
            _ => None,
        }
    }

    /// The response metadata, when the request reached Jira.
    pub fn response(&self) -> Option<&ResponseScheme> {
        match self {
            ApiError::Http { response, .. } | ApiError::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Whether this error was raised by input validation, before any I/O.
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            ApiError::Http { .. }
                | ApiError::Network(_)
                | ApiError::InvalidUrl(_)
                | ApiError::InvalidHeader(_)
                | ApiError::Encode(_)
                | ApiError::Decode { .. }
                | ApiError::Keyring(_)
        )
    }

    /// Check if an error is worth retrying (rate limiting, server errors, network).
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Http { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            ApiError::Network(_) => true,
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::Method;

    fn response(status: u16, body: &str) -> ResponseScheme {
        ResponseScheme {
            status: StatusCode::from_u16(status).unwrap(),
            method: Method::GET,
            endpoint: "https://company.atlassian.net/rest/api/3/field".to_string(),
            headers: HeaderMap::new(),
            bytes: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_error_from_response_401() {
        let err = ApiError::from_response(response(401, ""), "ignored");
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("authentication failed"));
    }

    #[test]
    fn test_error_from_response_404_without_message() {
        let err = ApiError::from_response(response(404, ""), "");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("rest/api/3/field"));
    }

    #[test]
    fn test_error_from_response_keeps_message() {
        let err = ApiError::from_response(response(400, "{}"), "Field 'x' does not exist");
        assert_eq!(err.to_string(), "HTTP 400 Bad Request: Field 'x' does not exist");
    }

    #[test]
    fn test_error_keeps_response_metadata() {
        let err = ApiError::from_response(response(500, "boom"), "");
        let meta = err.response().unwrap();
        assert_eq!(meta.bytes, b"boom");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_is_retryable() {
        assert!(ApiError::from_response(response(429, ""), "").is_retryable());
        assert!(ApiError::from_response(response(503, ""), "").is_retryable());
        assert!(!ApiError::from_response(response(404, ""), "").is_retryable());
        assert!(!ApiError::NoFieldId.is_retryable());
    }

    #[test]
    fn test_precondition_classification() {
        assert!(ApiError::NoVersion.is_precondition());
        assert!(ApiError::NoWorklogs.is_precondition());
        assert!(!ApiError::InvalidUrl("x".to_string()).is_precondition());
    }

    #[test]
    fn test_sentinel_messages() {
        assert_eq!(ApiError::NoVersion.to_string(), "no version provided");
        assert_eq!(ApiError::NoFieldId.to_string(), "no field ID provided");
        assert_eq!(
            ApiError::NoIssueKeyOrId.to_string(),
            "no issue key or ID provided"
        );
    }
}
