use crate::auth::AuthManager;
use crate::errors::OpenAIResult;
use crate::services::context::{require_id, ServiceContext};
use crate::services::files::{FileObject, FilePurpose, FileRequestValidator, FileUploadRequest};
use crate::transport::{HttpRequest, HttpTransport, MultipartForm};
use crate::types::{DeletionStatus, ListResponse};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait FileService: Send + Sync {
    async fn list(&self, purpose: Option<FilePurpose>) -> OpenAIResult<ListResponse<FileObject>>;
    async fn upload(&self, request: FileUploadRequest) -> OpenAIResult<FileObject>;
    async fn retrieve(&self, file_id: &str) -> OpenAIResult<FileObject>;
    async fn delete(&self, file_id: &str) -> OpenAIResult<DeletionStatus>;
    async fn content(&self, file_id: &str) -> OpenAIResult<Bytes>;
}

pub struct FileServiceImpl {
    context: ServiceContext,
}

impl FileServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            context: ServiceContext::new(transport, auth_manager),
        }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    #[instrument(skip(self))]
    async fn list(&self, purpose: Option<FilePurpose>) -> OpenAIResult<ListResponse<FileObject>> {
        let mut request = HttpRequest::get("/files");
        if let Some(purpose) = purpose {
            request = request.query("purpose", purpose.as_str());
        }
        self.context.execute(request).await
    }

    #[instrument(
        skip(self, request),
        fields(filename = %request.filename, purpose = %request.purpose, bytes = request.file_data.len())
    )]
    async fn upload(&self, request: FileUploadRequest) -> OpenAIResult<FileObject> {
        FileRequestValidator::validate(&request)?;

        let form = MultipartForm::new()
            .text("purpose", request.purpose.as_str())
            .file("file", &request.filename, request.file_data);

        let file: FileObject = self
            .context
            .execute(HttpRequest::post("/files").multipart(form))
            .await?;
        tracing::info!(file_id = %file.id, "file uploaded");
        Ok(file)
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, file_id: &str) -> OpenAIResult<FileObject> {
        require_id("file_id", file_id)?;
        self.context
            .execute(HttpRequest::get(format!("/files/{}", file_id)))
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, file_id: &str) -> OpenAIResult<DeletionStatus> {
        require_id("file_id", file_id)?;
        let status: DeletionStatus = self
            .context
            .execute(HttpRequest::delete(format!("/files/{}", file_id)))
            .await?;
        tracing::info!(deleted = status.deleted, "file deleted");
        Ok(status)
    }

    #[instrument(skip(self))]
    async fn content(&self, file_id: &str) -> OpenAIResult<Bytes> {
        require_id("file_id", file_id)?;
        self.context
            .execute_bytes(HttpRequest::get(format!("/files/{}/content", file_id)))
            .await
    }
}
