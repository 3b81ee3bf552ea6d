//! Error response fixtures

use serde_json::json;

pub fn error_401_invalid_api_key() -> serde_json::Value {
    json!({
        "error": {
            "message": "Incorrect API key provided: sk-bad. You can find your API key at https://platform.openai.com/account/api-keys.",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
}

pub fn error_404_not_found(resource: &str, id: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": format!("No {} found with id '{}'.", resource, id),
            "type": "invalid_request_error",
            "param": null,
            "code": null
        }
    })
}

pub fn error_400_invalid_param(param: &str, message: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "param": param,
            "code": null
        }
    })
}

pub fn error_429_rate_limit() -> serde_json::Value {
    json!({
        "error": {
            "message": "Rate limit reached for requests",
            "type": "requests",
            "param": null,
            "code": "rate_limit_exceeded"
        }
    })
}
