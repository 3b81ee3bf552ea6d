use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ASSISTANTS_VERSION: &str = "v1";

const ENV_API_KEY: &str = "OPENAI_API_KEY";
const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
const ENV_ORGANIZATION_ID: &str = "OPENAI_ORGANIZATION_ID";
const ENV_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    pub organization_id: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
    /// Value sent in the `OpenAI-Beta: assistants=<version>` header.
    pub assistants_version: String,
}

impl OpenAIConfig {
    /// Creates a new OpenAIConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            organization_id: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            assistants_version: DEFAULT_ASSISTANTS_VERSION.to_string(),
        }
    }

    /// Creates a new OpenAIConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    /// - OPENAI_ORGANIZATION_ID (optional)
    /// - OPENAI_TIMEOUT_SECS (optional, defaults to 60)
    pub fn from_env() -> OpenAIResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads a `.env` file from the current directory or its parents, then
    /// reads the environment like [`OpenAIConfig::from_env`]. A missing
    /// `.env` file is not an error.
    pub fn from_dotenv() -> OpenAIResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => tracing::debug!("no .env file found"),
            Err(err) => {
                return Err(OpenAIError::Configuration(
                    ConfigurationError::MissingConfiguration(format!(
                        "failed to load .env file: {}",
                        err
                    )),
                ))
            }
        }
        Self::from_env()
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> OpenAIResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY).filter(|key| !key.is_empty()).ok_or_else(|| {
            OpenAIError::Configuration(ConfigurationError::MissingApiKey(format!(
                "{} environment variable not found",
                ENV_API_KEY
            )))
        })?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }

        if let Some(org_id) = lookup(ENV_ORGANIZATION_ID) {
            config.organization_id = Some(org_id);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                OpenAIError::Configuration(ConfigurationError::InvalidEnvVar {
                    name: ENV_TIMEOUT_SECS.to_string(),
                    reason: e.to_string(),
                })
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> OpenAIResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "API key is empty".to_string(),
            )));
        }

        if self.timeout.is_zero() {
            return Err(OpenAIError::Configuration(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )));
        }

        let url = self.parsed_base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(
                format!("unsupported scheme '{}'", url.scheme()),
            )));
        }

        Ok(())
    }

    pub fn parsed_base_url(&self) -> OpenAIResult<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                "{}: {}",
                self.base_url, e
            )))
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_assistants_version(mut self, version: impl Into<String>) -> Self {
        self.assistants_version = version.into();
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    format!("gpt-manager/{}", env!("CARGO_PKG_VERSION"))
}
