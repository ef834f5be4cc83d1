//! reqwest-backed connector.
//!
//! [`JiraClient`] resolves endpoints against a site URL, attaches
//! credentials, sends the request and turns non-2xx responses into
//! [`ApiError::Http`]. Retries are off unless enabled in [`ClientConfig`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use tracing::{debug, info, instrument, warn};

use super::auth::Auth;
use super::connector::{Connector, Request, RequestBody, ResponseScheme};
use super::error::{ApiError, Result};
use crate::config::{Profile, Settings};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base delay between retries in milliseconds.
const RETRY_DELAY_MS: u64 = 1000;

/// Upper bound on a single backoff delay in milliseconds.
const MAX_RETRY_DELAY_MS: u64 = 60_000;

/// Jira's XSRF bypass header, required for multipart uploads.
const ATLASSIAN_TOKEN_HEADER: &str = "x-atlassian-token";

/// HTTP settings for [`JiraClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub timeout_secs: u64,
    /// Extra attempts for idempotent requests. Zero disables retries.
    pub max_retries: u32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: 0,
            user_agent: format!("jira-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&Settings> for ClientConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            timeout_secs: settings.timeout_secs,
            max_retries: settings.max_retries,
            ..Self::default()
        }
    }
}

/// The Jira API client.
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// The base URL for the Jira site, without a trailing slash.
    base_url: String,
    /// Credentials; `None` for anonymous access.
    auth: Option<Auth>,
    config: ClientConfig,
}

impl JiraClient {
    /// Create a client for a configured profile.
    ///
    /// The API token comes from `JIRA_API_TOKEN` or the OS keyring.
    #[instrument(skip(profile, settings), fields(profile_name = %profile.name))]
    pub fn from_profile(profile: &Profile, settings: &Settings) -> Result<Self> {
        info!("Creating Jira client for profile");
        let auth = Auth::for_profile(&profile.name, &profile.email)?;
        Self::with_config(&profile.url, Some(auth), ClientConfig::from(settings))
    }

    /// Create a client with Basic auth credentials and default settings.
    pub fn with_credentials(base_url: &str, email: &str, token: &str) -> Result<Self> {
        Self::with_config(
            base_url,
            Some(Auth::basic(email, token)),
            ClientConfig::default(),
        )
    }

    /// Create a client with explicit credentials and settings.
    pub fn with_config(base_url: &str, auth: Option<Auth>, config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
            auth,
            config,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a single attempt.
    async fn execute(&self, request: Request) -> Result<ResponseScheme> {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .headers(headers);

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.body(bytes),
            RequestBody::Multipart {
                field,
                file_name,
                content,
            } => builder.multipart(Form::new().part(field, Part::bytes(content).file_name(file_name))),
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let endpoint = response.url().to_string();
        let bytes = response.bytes().await?.to_vec();

        debug!(status = %status, bytes = bytes.len(), "Received response");

        let scheme = ResponseScheme {
            status,
            method,
            endpoint,
            headers,
            bytes,
        };

        if status.is_success() {
            Ok(scheme)
        } else {
            let message = error_message(&scheme.bytes);
            debug!("Error response body: {}", scheme.text());
            Err(ApiError::from_response(scheme, &message))
        }
    }

    /// Exponential backoff, capped at [`MAX_RETRY_DELAY_MS`].
    fn calculate_retry_delay(attempt: u32) -> u64 {
        2u64.checked_pow(attempt.saturating_sub(1))
            .map_or(MAX_RETRY_DELAY_MS, |factor| RETRY_DELAY_MS.saturating_mul(factor))
            .min(MAX_RETRY_DELAY_MS)
    }
}

#[async_trait]
impl Connector for JiraClient {
    fn new_request(&self, method: Method, endpoint: &str, body: RequestBody) -> Result<Request> {
        let raw = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(auth) = &self.auth {
            let value = HeaderValue::from_str(auth.header_value())
                .map_err(|e| ApiError::InvalidHeader(format!("authorization: {}", e)))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        match &body {
            RequestBody::Json(_) => {
                headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
            }
            RequestBody::Multipart { .. } => {
                headers.insert(ATLASSIAN_TOKEN_HEADER, HeaderValue::from_static("no-check"));
            }
            RequestBody::Empty => {}
        }

        Ok(Request {
            method,
            url,
            headers,
            body,
        })
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn call(&self, request: Request) -> Result<ResponseScheme> {
        // Only idempotent reads are ever retried.
        let max_attempts = if request.method == Method::GET {
            self.config.max_retries.saturating_add(1)
        } else {
            1
        };

        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            debug!("Request attempt {}/{}", attempts, max_attempts);

            match self.execute(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempts < max_attempts => {
                    let delay = Self::calculate_retry_delay(attempts);
                    warn!(
                        "Request failed (attempt {}), retrying in {}ms: {}",
                        attempts, delay, e
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Flatten Jira's `errorMessages` / `errors` payload into one message.
fn error_message(body: &[u8]) -> String {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) else {
        return String::new();
    };

    let mut parts: Vec<String> = json
        .get("errorMessages")
        .and_then(|m| m.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if let Some(obj) = json.get("errors").and_then(|e| e.as_object()) {
        parts.extend(obj.iter().map(|(k, v)| match v.as_str() {
            Some(s) => format!("{}: {}", k, s),
            None => format!("{}: {}", k, v),
        }));
    }

    parts.join(", ")
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    // Warn if not HTTPS (but don't enforce for localhost/testing)
    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    url.to_string()
}
