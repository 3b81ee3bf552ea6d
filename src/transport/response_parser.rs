use crate::errors::{ErrorMapper, OpenAIError, OpenAIResult};
use crate::transport::HttpResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> OpenAIResult<T> {
        if !response.is_success() {
            return Err(Self::into_error(&response));
        }
        Self::parse_json(&response.body)
    }

    pub fn parse_bytes(response: HttpResponse) -> OpenAIResult<Bytes> {
        if !response.is_success() {
            return Err(Self::into_error(&response));
        }
        Ok(response.body)
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> OpenAIResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            OpenAIError::Deserialization(format!(
                "Failed to deserialize response: {}. Body: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }

    fn into_error(response: &HttpResponse) -> OpenAIError {
        let error = ErrorMapper::from_response(
            response.status.as_u16(),
            &response.headers,
            &response.body,
        );
        tracing::warn!(status = response.status.as_u16(), error = %error, "request failed");
        error
    }
}
