//! Mock HTTP transport for testing

use crate::errors::{NetworkError, OpenAIError, OpenAIResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: VecDeque<OpenAIResult<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a 200 response with a JSON body
    pub fn with_json_response(self, response: serde_json::Value) -> Self {
        self.with_status_response(StatusCode::OK, response)
    }

    /// Add a response with an arbitrary status and JSON body
    pub fn with_status_response(self, status: StatusCode, body: serde_json::Value) -> Self {
        self.push(Ok(HttpResponse::new(status, body.to_string())))
    }

    /// Add a 200 response with a raw body
    pub fn with_bytes_response(self, body: impl Into<Bytes>) -> Self {
        self.push(Ok(HttpResponse::new(StatusCode::OK, body)))
    }

    /// Add a transport-level failure
    pub fn with_error_response(self, error: OpenAIError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: OpenAIResult<HttpResponse>) -> Self {
        self.inner.lock().unwrap().responses.push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Verify that a request was made with the given method and path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner.responses.pop_front().unwrap_or_else(|| {
            Err(OpenAIError::Network(NetworkError::RequestFailed(
                "No mock response configured".to_string(),
            )))
        })
    }
}
