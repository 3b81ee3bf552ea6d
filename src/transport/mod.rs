mod http_transport;
mod multipart;
mod request;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use multipart::{MultipartForm, MultipartPart};
pub use request::{HttpRequest, HttpResponse, RequestBody};
pub use response_parser::ResponseParser;

use crate::errors::OpenAIResult;
use async_trait::async_trait;

/// Sends a fully prepared request and hands back the raw response.
///
/// Implementations do not interpret status codes; that is left to
/// [`ResponseParser`] so every transport maps API errors the same way.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> OpenAIResult<HttpResponse>;
}
