use crate::auth::AuthManager;
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::header::{HeaderValue, AUTHORIZATION};
use http::HeaderMap;

/// Auth manager that stamps a fixed bearer token or fails on demand.
#[derive(Clone, Default)]
pub struct MockAuthManager {
    error: Option<AuthenticationError>,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: AuthenticationError) -> Self {
        self.error = Some(error);
        self
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        if let Some(error) = &self.error {
            return Err(OpenAIError::Authentication(error.clone()));
        }
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer sk-test"));
        Ok(())
    }

    fn validate(&self) -> OpenAIResult<()> {
        match &self.error {
            Some(error) => Err(OpenAIError::Authentication(error.clone())),
            None => Ok(()),
        }
    }
}
