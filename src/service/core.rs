//! The validate → build → dispatch → decode pipeline every service shares.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::api::{with_query, ApiError, Connector, QueryParams, RequestBody, ResponseScheme, Result};

/// Values that count as "absent" when empty or zero.
pub(crate) trait Required {
    fn is_missing(&self) -> bool;
}

impl Required for str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Required for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Required for i64 {
    fn is_missing(&self) -> bool {
        *self == 0
    }
}

impl<T> Required for [T] {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Required for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

/// Fail with `err` when `value` is absent.
pub(crate) fn require<V: Required + ?Sized>(value: &V, err: ApiError) -> Result<()> {
    if value.is_missing() {
        Err(err)
    } else {
        Ok(())
    }
}

/// A single request, described before it reaches the connector.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    method: Method,
    path: String,
    query: QueryParams,
    body: RequestBody,
}

impl Endpoint {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: RequestBody::Empty,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON payload.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, payload: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(payload).map_err(ApiError::Encode)?;
        self.body = RequestBody::Json(bytes);
        Ok(self)
    }

    /// Attach a single-file multipart body.
    pub(crate) fn multipart(mut self, file_name: &str, content: &[u8]) -> Self {
        self.body = RequestBody::Multipart {
            field: "file".to_string(),
            file_name: file_name.to_string(),
            content: content.to_vec(),
        };
        self
    }

    /// The relative path plus encoded query.
    pub(crate) fn target(&self) -> String {
        with_query(&self.path, &self.query)
    }
}

/// State shared by every service: the connector and the API version.
#[derive(Clone)]
pub(crate) struct ServiceCore {
    connector: Arc<dyn Connector>,
    version: String,
}

impl ServiceCore {
    pub(crate) fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        require(version, ApiError::NoVersion)?;
        Ok(Self {
            connector,
            version: version.to_string(),
        })
    }

    pub(crate) fn version(&self) -> &str {
        &self.version
    }

    /// `rest/api/{version}/{tail}`.
    pub(crate) fn api(&self, tail: &str) -> String {
        format!("rest/api/{}/{}", self.version, tail)
    }

    /// Dispatch and return the response metadata only.
    pub(crate) async fn execute(&self, endpoint: Endpoint) -> Result<ResponseScheme> {
        let target = endpoint.target();
        debug!(method = %endpoint.method, endpoint = %target, "Dispatching request");

        let request = self
            .connector
            .new_request(endpoint.method, &target, endpoint.body)?;
        let response = self.connector.call(request).await?;

        trace!(status = %response.status, "Request complete");
        Ok(response)
    }

    /// Dispatch and decode the body into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<(T, ResponseScheme)> {
        let response = self.execute(endpoint).await?;
        match serde_json::from_slice::<T>(&response.bytes) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(ApiError::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }
}

impl std::fmt::Debug for ServiceCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCore")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
