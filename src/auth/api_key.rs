use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::header::{HeaderValue, AUTHORIZATION};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Bearer API key provider
pub struct ApiKeyProvider {
    api_key: SecretString,
    organization_id: Option<String>,
}

impl ApiKeyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(SecretString::new(api_key.into()))
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self {
            api_key,
            organization_id: None,
        }
    }

    pub fn with_organization(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    fn bearer_value(&self) -> OpenAIResult<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| {
                OpenAIError::Authentication(AuthenticationError::InvalidHeader(
                    AUTHORIZATION.to_string(),
                ))
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl AuthProvider for ApiKeyProvider {
    async fn authenticate(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        if !self.is_valid() {
            return Err(OpenAIError::Authentication(
                AuthenticationError::InvalidApiKey("API key is empty".to_string()),
            ));
        }

        headers.insert(AUTHORIZATION, self.bearer_value()?);

        if let Some(org_id) = &self.organization_id {
            let value = HeaderValue::from_str(org_id).map_err(|_| {
                OpenAIError::Authentication(AuthenticationError::InvalidHeader(
                    ORGANIZATION_HEADER.to_string(),
                ))
            })?;
            headers.insert(ORGANIZATION_HEADER, value);
        }

        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }
}
