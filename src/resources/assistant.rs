use crate::client::OpenAIClient;
use crate::errors::{OpenAIResult, ResultExt};
use crate::services::assistants::{
    Assistant, AssistantFile, CreateAssistantRequest, ModifyAssistantRequest,
};
use crate::types::{DeletionStatus, ListParams, ListResponse};

impl Assistant {
    pub async fn create(
        client: &dyn OpenAIClient,
        request: CreateAssistantRequest,
    ) -> OpenAIResult<Self> {
        client
            .assistants()
            .create(request)
            .await
            .context("create assistant")
    }

    pub async fn fetch(client: &dyn OpenAIClient, assistant_id: &str) -> OpenAIResult<Self> {
        client
            .assistants()
            .retrieve(assistant_id)
            .await
            .context("retrieve assistant")
    }

    pub async fn refresh(&mut self, client: &dyn OpenAIClient) -> OpenAIResult<()> {
        *self = Self::fetch(client, &self.id).await?;
        Ok(())
    }

    pub async fn update(
        &mut self,
        client: &dyn OpenAIClient,
        request: ModifyAssistantRequest,
    ) -> OpenAIResult<()> {
        *self = client
            .assistants()
            .modify(&self.id, request)
            .await
            .context("modify assistant")?;
        Ok(())
    }

    pub async fn delete(self, client: &dyn OpenAIClient) -> OpenAIResult<DeletionStatus> {
        client
            .assistants()
            .delete(&self.id)
            .await
            .context("delete assistant")
    }

    /// Attaches an uploaded file and records its id locally.
    pub async fn attach_file(
        &mut self,
        client: &dyn OpenAIClient,
        file_id: &str,
    ) -> OpenAIResult<AssistantFile> {
        let file = client
            .assistants()
            .create_file(&self.id, file_id)
            .await
            .context("create assistant file")?;
        if !self.file_ids.iter().any(|id| id == file_id) {
            self.file_ids.push(file_id.to_string());
        }
        Ok(file)
    }

    pub async fn file(
        &self,
        client: &dyn OpenAIClient,
        file_id: &str,
    ) -> OpenAIResult<AssistantFile> {
        client
            .assistants()
            .retrieve_file(&self.id, file_id)
            .await
            .context("retrieve assistant file")
    }

    pub async fn detach_file(
        &mut self,
        client: &dyn OpenAIClient,
        file_id: &str,
    ) -> OpenAIResult<DeletionStatus> {
        let status = client
            .assistants()
            .delete_file(&self.id, file_id)
            .await
            .context("delete assistant file")?;
        if status.deleted {
            self.file_ids.retain(|id| id != file_id);
        }
        Ok(status)
    }

    pub async fn files(
        &self,
        client: &dyn OpenAIClient,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<AssistantFile>> {
        client
            .assistants()
            .list_files(&self.id, params)
            .await
            .context("list assistant files")
    }
}
