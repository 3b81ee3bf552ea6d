use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Expired API key: {0}")]
    ExpiredApiKey(String),

    #[error("Insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("Invalid header value for {0}")]
    InvalidHeader(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },

    #[error("File too large: max size is {max_size} bytes, got {actual_size} bytes")]
    FileTooLarge { max_size: u64, actual_size: u64 },

    #[error("Unsupported content: {0}")]
    UnsupportedContent(String),
}

#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Too many requests: {message}")]
    TooManyRequests {
        message: String,
        retry_after_secs: Option<u64>,
    },
}

impl RateLimitError {
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            RateLimitError::TooManyRequests { retry_after_secs, .. } => *retry_after_secs,
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to read response body: {0}")]
    BodyRead(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    #[error("HTTP {status}: {message}")]
    Other { status: u16, message: String },
}
