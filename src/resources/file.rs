use crate::client::OpenAIClient;
use crate::errors::{OpenAIResult, ResultExt};
use crate::services::files::{FileObject, FileUploadRequest};
use crate::types::DeletionStatus;
use bytes::Bytes;

impl FileObject {
    pub async fn upload(
        client: &dyn OpenAIClient,
        request: FileUploadRequest,
    ) -> OpenAIResult<Self> {
        client.files().upload(request).await.context("upload file")
    }

    pub async fn refresh(&mut self, client: &dyn OpenAIClient) -> OpenAIResult<()> {
        *self = client
            .files()
            .retrieve(&self.id)
            .await
            .context("retrieve file")?;
        Ok(())
    }

    pub async fn delete(self, client: &dyn OpenAIClient) -> OpenAIResult<DeletionStatus> {
        client.files().delete(&self.id).await.context("delete file")
    }

    pub async fn content(&self, client: &dyn OpenAIClient) -> OpenAIResult<Bytes> {
        client
            .files()
            .content(&self.id)
            .await
            .context("retrieve file content")
    }
}
