use crate::auth::AuthManager;
use crate::client::DEFAULT_ASSISTANTS_VERSION;
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult, ValidationError};
use crate::transport::{HttpRequest, HttpTransport, ResponseParser};
use bytes::Bytes;
use http::header::HeaderValue;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const BETA_HEADER: &str = "OpenAI-Beta";

/// Transport plus credentials shared by every service implementation.
#[derive(Clone)]
pub struct ServiceContext {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    assistants_version: Option<String>,
}

impl ServiceContext {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            transport,
            auth_manager,
            assistants_version: None,
        }
    }

    /// Sends `OpenAI-Beta: assistants=<version>` on every request.
    pub fn with_assistants_beta(mut self, version: impl Into<String>) -> Self {
        self.assistants_version = Some(version.into());
        self
    }

    pub(crate) fn assistants(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        Self::new(transport, auth_manager).with_assistants_beta(DEFAULT_ASSISTANTS_VERSION)
    }

    async fn prepare(&self, mut request: HttpRequest) -> OpenAIResult<HttpRequest> {
        self.auth_manager.apply_auth(&mut request.headers).await?;

        if let Some(version) = &self.assistants_version {
            let value = HeaderValue::from_str(&format!("assistants={}", version)).map_err(|_| {
                OpenAIError::Authentication(AuthenticationError::InvalidHeader(
                    BETA_HEADER.to_string(),
                ))
            })?;
            request.headers.insert(BETA_HEADER, value);
        }

        Ok(request)
    }

    pub async fn execute<T>(&self, request: HttpRequest) -> OpenAIResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let request = self.prepare(request).await?;
        let response = self.transport.send(request).await?;
        ResponseParser::parse_response(response)
    }

    pub async fn execute_bytes(&self, request: HttpRequest) -> OpenAIResult<Bytes> {
        let request = self.prepare(request).await?;
        let response = self.transport.send(request).await?;
        ResponseParser::parse_bytes(response)
    }
}

/// Rejects empty identifiers before they turn into malformed paths.
pub(crate) fn require_id(field: &str, value: &str) -> OpenAIResult<()> {
    if value.trim().is_empty() {
        return Err(OpenAIError::Validation(ValidationError::MissingRequiredField(
            field.to_string(),
        )));
    }
    Ok(())
}
