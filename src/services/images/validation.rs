use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::images::{ImageEditRequest, ImageGenerationRequest, ImageVariationRequest};

pub struct ImageRequestValidator;

impl ImageRequestValidator {
    pub fn validate(request: &ImageGenerationRequest) -> OpenAIResult<()> {
        Self::validate_prompt(&request.prompt)?;
        Self::validate_n(request.n)
    }

    pub fn validate_edit(request: &ImageEditRequest) -> OpenAIResult<()> {
        Self::validate_prompt(&request.prompt)?;
        Self::validate_image("image", &request.image.data)?;
        if let Some(mask) = &request.mask {
            Self::validate_image("mask", &mask.data)?;
        }
        Self::validate_n(request.n)
    }

    pub fn validate_variation(request: &ImageVariationRequest) -> OpenAIResult<()> {
        Self::validate_image("image", &request.image.data)?;
        Self::validate_n(request.n)
    }

    fn validate_prompt(prompt: &str) -> OpenAIResult<()> {
        if prompt.trim().is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("prompt".to_string()),
            ));
        }
        Ok(())
    }

    fn validate_image(field: &str, data: &[u8]) -> OpenAIResult<()> {
        if data.is_empty() {
            return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
                parameter: field.to_string(),
                reason: "image cannot be empty".to_string(),
            }));
        }
        Ok(())
    }

    fn validate_n(n: Option<u32>) -> OpenAIResult<()> {
        if let Some(n) = n {
            if n == 0 || n > 10 {
                return Err(OpenAIError::Validation(ValidationError::ValueOutOfRange {
                    field: "n".to_string(),
                    min: "1".to_string(),
                    max: "10".to_string(),
                    value: n.to_string(),
                }));
            }
        }
        Ok(())
    }
}
