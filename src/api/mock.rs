//! A recording connector for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

use super::connector::{Connector, Request, RequestBody, ResponseScheme};
use super::error::{ApiError, Result};

const MOCK_SITE: &str = "https://mock.atlassian.net";

/// What `new_request` was asked to build.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub endpoint: String,
    pub body: RequestBody,
}

/// Records every request and answers with a canned response.
pub struct MockConnector {
    status: StatusCode,
    body: Vec<u8>,
    recorded: Mutex<Vec<Recorded>>,
    requests: AtomicUsize,
    calls: AtomicUsize,
    request_error: Mutex<Option<ApiError>>,
    call_error: Mutex<Option<ApiError>>,
}

impl MockConnector {
    /// Answer every call with `status` and a JSON body.
    pub fn responding(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::raw(status, serde_json::to_vec(&body).unwrap())
    }

    /// Answer every call with `status` and raw bytes.
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            recorded: Mutex::new(Vec::new()),
            requests: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            request_error: Mutex::new(None),
            call_error: Mutex::new(None),
        })
    }

    /// Answer with 204 and no body.
    pub fn no_content() -> Arc<Self> {
        Self::raw(204, Vec::new())
    }

    /// Fail the next `new_request` with `err`.
    pub fn failing_request(err: ApiError) -> Arc<Self> {
        let mock = Self::no_content();
        *mock.request_error.lock().unwrap() = Some(err);
        mock
    }

    /// Fail the next `call` with `err`.
    pub fn failing_call(err: ApiError) -> Arc<Self> {
        let mock = Self::no_content();
        *mock.call_error.lock().unwrap() = Some(err);
        mock
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request `new_request` was asked for.
    pub fn last(&self) -> Recorded {
        self.recorded
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn last_endpoint(&self) -> String {
        self.last().endpoint
    }

    pub fn last_method(&self) -> Method {
        self.last().method
    }

    /// The most recent JSON body, parsed.
    pub fn last_json(&self) -> serde_json::Value {
        match self.last().body {
            RequestBody::Json(bytes) => serde_json::from_slice(&bytes).unwrap(),
            other => panic!("expected a JSON body, got {:?}", other),
        }
    }

    /// No request was built and nothing was dispatched.
    pub fn untouched(&self) -> bool {
        self.request_count() == 0 && self.call_count() == 0
    }
}

/// A canned error response, as a connector would return it.
pub fn http_error(status: u16, body: &str) -> ApiError {
    let response = ResponseScheme {
        status: StatusCode::from_u16(status).unwrap(),
        method: Method::GET,
        endpoint: format!("{}/rest/api/3/mock", MOCK_SITE),
        headers: HeaderMap::new(),
        bytes: body.as_bytes().to_vec(),
    };
    ApiError::from_response(response, body)
}

#[async_trait]
impl Connector for MockConnector {
    fn new_request(&self, method: Method, endpoint: &str, body: RequestBody) -> Result<Request> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(Recorded {
            method: method.clone(),
            endpoint: endpoint.to_string(),
            body: body.clone(),
        });

        if let Some(err) = self.request_error.lock().unwrap().take() {
            return Err(err);
        }

        let url = Url::parse(&format!("{}/{}", MOCK_SITE, endpoint))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        Ok(Request {
            method,
            url,
            headers: HeaderMap::new(),
            body,
        })
    }

    async fn call(&self, request: Request) -> Result<ResponseScheme> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.call_error.lock().unwrap().take() {
            return Err(err);
        }

        Ok(ResponseScheme {
            status: self.status,
            method: request.method,
            endpoint: request.url.to_string(),
            headers: HeaderMap::new(),
            bytes: self.body.clone(),
        })
    }
}
