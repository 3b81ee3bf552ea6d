use crate::auth::AuthManager;
use crate::errors::OpenAIResult;
use crate::services::context::ServiceContext;
use crate::services::images::{
    ImageEditRequest, ImageGenerationRequest, ImageRequestValidator, ImageResponse,
    ImageVariationRequest,
};
use crate::transport::{HttpRequest, HttpTransport, MultipartForm};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait ImageService: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest) -> OpenAIResult<ImageResponse>;
    async fn edit(&self, request: ImageEditRequest) -> OpenAIResult<ImageResponse>;
    async fn variation(&self, request: ImageVariationRequest) -> OpenAIResult<ImageResponse>;
}

pub struct ImageServiceImpl {
    context: ServiceContext,
}

impl ImageServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            context: ServiceContext::new(transport, auth_manager),
        }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    #[instrument(skip(self, request), fields(model = ?request.model, n = ?request.n))]
    async fn generate(&self, request: ImageGenerationRequest) -> OpenAIResult<ImageResponse> {
        ImageRequestValidator::validate(&request)?;
        let response: ImageResponse = self
            .context
            .execute(HttpRequest::post("/images/generations").json(&request)?)
            .await?;
        tracing::info!(images = response.data.len(), "images generated");
        Ok(response)
    }

    #[instrument(skip(self, request), fields(image = %request.image.filename, n = ?request.n))]
    async fn edit(&self, request: ImageEditRequest) -> OpenAIResult<ImageResponse> {
        ImageRequestValidator::validate_edit(&request)?;

        let mut form = MultipartForm::new()
            .file("image", &request.image.filename, request.image.data)
            .text("prompt", request.prompt);
        if let Some(mask) = request.mask {
            form = form.file("mask", &mask.filename, mask.data);
        }
        let form = form
            .text_opt("model", request.model)
            .text_opt("n", request.n)
            .text_opt("size", request.size.map(|s| s.as_str()))
            .text_opt("response_format", request.response_format.map(|f| f.as_str()))
            .text_opt("user", request.user);

        self.context
            .execute(HttpRequest::post("/images/edits").multipart(form))
            .await
    }

    #[instrument(skip(self, request), fields(image = %request.image.filename, n = ?request.n))]
    async fn variation(&self, request: ImageVariationRequest) -> OpenAIResult<ImageResponse> {
        ImageRequestValidator::validate_variation(&request)?;

        let form = MultipartForm::new()
            .file("image", &request.image.filename, request.image.data)
            .text_opt("model", request.model)
            .text_opt("n", request.n)
            .text_opt("size", request.size.map(|s| s.as_str()))
            .text_opt("response_format", request.response_format.map(|f| f.as_str()))
            .text_opt("user", request.user);

        self.context
            .execute(HttpRequest::post("/images/variations").multipart(form))
            .await
    }
}
