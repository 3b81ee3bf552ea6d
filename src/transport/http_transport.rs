use crate::client::OpenAIConfig;
use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(config: &OpenAIConfig) -> OpenAIResult<Self> {
        let base_url = config.parsed_base_url()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                OpenAIError::Configuration(ConfigurationError::HttpClient(e.to_string()))
            })?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    fn build_url(&self, request: &HttpRequest) -> String {
        let path = request.path_and_query();
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(
        skip(self, request),
        fields(method = %request.method, path = %request.path)
    )]
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse> {
        let url = self.build_url(&request);

        let mut builder = self
            .client
            .request(request.method, &url)
            .headers(request.headers);

        builder = match request.body {
            Some(RequestBody::Bytes(body)) => builder.body(body),
            Some(RequestBody::Multipart(form)) => builder.multipart(form.into_form()?),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| match OpenAIError::from(e) {
            OpenAIError::Timeout { .. } => OpenAIError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            },
            other => other,
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
