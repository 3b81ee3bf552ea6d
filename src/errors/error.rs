use crate::errors::categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
use thiserror::Error;

pub type OpenAIResult<T> = Result<T, OpenAIError>;

#[derive(Error, Debug)]
pub enum OpenAIError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Not found: {message}")]
    NotFound {
        message: String,
        error_code: Option<String>,
    },

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: operation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// A failure annotated with the action that was being attempted.
    #[error("Failed to {operation}: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<OpenAIError>,
    },
}

impl OpenAIError {
    /// Returns the innermost error, skipping any operation context.
    pub fn root(&self) -> &OpenAIError {
        match self {
            OpenAIError::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self.root(), OpenAIError::Authentication(_))
    }

    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self.root(), OpenAIError::RateLimit(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), OpenAIError::NotFound { .. })
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self.root(), OpenAIError::Validation(_))
    }

    pub fn retry_after(&self) -> Option<u64> {
        match self.root() {
            OpenAIError::RateLimit(err) => err.retry_after(),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self.root() {
            OpenAIError::Request { error_code, .. } | OpenAIError::NotFound { error_code, .. } => {
                error_code.as_deref()
            }
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.root() {
            OpenAIError::Request { status_code, .. } => Some(*status_code),
            OpenAIError::NotFound { .. } => Some(404),
            OpenAIError::Authentication(AuthenticationError::InsufficientPermissions(_))
            | OpenAIError::Authentication(AuthenticationError::Unauthorized(_)) => Some(403),
            OpenAIError::Authentication(AuthenticationError::InvalidApiKey(_))
            | OpenAIError::Authentication(AuthenticationError::ExpiredApiKey(_)) => Some(401),
            OpenAIError::RateLimit(_) => Some(429),
            OpenAIError::Server(ServerError::InternalError(_)) => Some(500),
            OpenAIError::Server(ServerError::BadGateway(_)) => Some(502),
            OpenAIError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            OpenAIError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            OpenAIError::Server(ServerError::Other { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Attaches the attempted action to a failed result.
pub trait ResultExt<T> {
    fn context(self, operation: &'static str) -> OpenAIResult<T>;
}

impl<T> ResultExt<T> for OpenAIResult<T> {
    fn context(self, operation: &'static str) -> OpenAIResult<T> {
        self.map_err(|source| OpenAIError::Operation {
            operation,
            source: Box::new(source),
        })
    }
}

impl From<reqwest::Error> for OpenAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAIError::Timeout { timeout_ms: 0 }
        } else if err.is_connect() {
            OpenAIError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else if err.is_body() || err.is_decode() {
            OpenAIError::Network(NetworkError::BodyRead(err.to_string()))
        } else {
            OpenAIError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for OpenAIError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            OpenAIError::Deserialization(err.to_string())
        } else {
            OpenAIError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for OpenAIError {
    fn from(err: url::ParseError) -> Self {
        OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
