//! The transport seam between resource services and HTTP.
//!
//! Services never talk to reqwest directly. They describe a request, hand it
//! to a [`Connector`], and decode whatever comes back. [`JiraClient`] is the
//! production connector; tests substitute a recording double.
//!
//! [`JiraClient`]: super::JiraClient

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

use super::error::Result;

/// The body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// A serialized JSON document.
    Json(Vec<u8>),
    /// A single-file multipart upload.
    Multipart {
        /// The form field name (Jira expects `file`).
        field: String,
        file_name: String,
        content: Vec<u8>,
    },
}

impl RequestBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

/// A transport-ready request produced by [`Connector::new_request`].
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// The absolute URL, base URL already applied.
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// Response metadata returned from every dispatched call.
#[derive(Debug, Clone)]
pub struct ResponseScheme {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The request method.
    pub method: Method,
    /// The URL that was called.
    pub endpoint: String,
    /// The response headers.
    pub headers: HeaderMap,
    /// The raw response body.
    pub bytes: Vec<u8>,
}

impl ResponseScheme {
    /// The response body as (lossy) UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Look up a response header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Builds and dispatches HTTP requests on behalf of the services.
///
/// Implementations own the base URL, credentials and HTTP client. Errors
/// from either step are returned to the caller unchanged.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Build a request for `endpoint`, a relative path with its query string.
    fn new_request(&self, method: Method, endpoint: &str, body: RequestBody) -> Result<Request>;

    /// Dispatch a request and return the response metadata.
    ///
    /// Non-2xx responses come back as [`ApiError::Http`] carrying the
    /// response.
    ///
    /// [`ApiError::Http`]: super::ApiError::Http
    async fn call(&self, request: Request) -> Result<ResponseScheme>;
}
