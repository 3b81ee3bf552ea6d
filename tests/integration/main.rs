//! Integration tests using WireMock
//!
//! Each test runs the full request/response cycle through the real
//! `ReqwestTransport` against a local mock server.

mod assistants;
mod errors;
mod images;
mod threads_runs;

use gpt_manager::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> Arc<dyn OpenAIClient> {
    OpenAIClientBuilder::new()
        .with_config(OpenAIConfig::new(TEST_API_KEY).with_base_url(server.uri()))
        .build()
        .expect("Failed to build client")
}

/// Matches an authenticated call to an assistants-family endpoint.
pub fn beta_mock(method_matcher: &str, path_matcher: &str) -> wiremock::MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("OpenAI-Beta", "assistants=v1"))
}

/// Matches an authenticated call to a non-beta endpoint.
pub fn plain_mock(method_matcher: &str, path_matcher: &str) -> wiremock::MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header("Authorization", "Bearer test-api-key"))
}

pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn error_response(status: u16, error_body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(error_body)
}
