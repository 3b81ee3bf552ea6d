use crate::auth::{ApiKeyProvider, AuthProvider};
use crate::client::OpenAIConfig;
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()>;

    /// Validates the authentication configuration
    fn validate(&self) -> OpenAIResult<()>;
}

pub struct OpenAIAuthManager {
    provider: Arc<dyn AuthProvider>,
}

impl OpenAIAuthManager {
    pub fn new(config: &OpenAIConfig) -> Self {
        let mut provider = ApiKeyProvider::from_secret(config.api_key.clone());

        if let Some(org_id) = &config.organization_id {
            provider = provider.with_organization(org_id.clone());
        }

        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AuthManager for OpenAIAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        self.provider.authenticate(headers).await
    }

    fn validate(&self) -> OpenAIResult<()> {
        if !self.provider.is_valid() {
            return Err(OpenAIError::Authentication(
                AuthenticationError::InvalidApiKey("API key validation failed".to_string()),
            ));
        }
        Ok(())
    }
}
