use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::files::FileUploadRequest;

pub struct FileRequestValidator;

impl FileRequestValidator {
    pub const MAX_FILE_SIZE: u64 = 512 * 1024 * 1024;

    pub fn validate(request: &FileUploadRequest) -> OpenAIResult<()> {
        if request.filename.trim().is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("filename".to_string()),
            ));
        }

        if request.file_data.is_empty() {
            return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
                parameter: "file".to_string(),
                reason: "file cannot be empty".to_string(),
            }));
        }

        let file_size = request.file_data.len() as u64;
        if file_size > Self::MAX_FILE_SIZE {
            return Err(OpenAIError::Validation(ValidationError::FileTooLarge {
                max_size: Self::MAX_FILE_SIZE,
                actual_size: file_size,
            }));
        }

        Ok(())
    }
}
