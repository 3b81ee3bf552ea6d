use crate::auth::AuthManager;
use crate::errors::OpenAIResult;
use crate::services::assistants::types::CreateAssistantFileRequest;
use crate::services::assistants::{
    Assistant, AssistantFile, CreateAssistantRequest, ModifyAssistantRequest,
};
use crate::services::context::{require_id, ServiceContext};
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::{DeletionStatus, ListParams, ListResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn create(&self, request: CreateAssistantRequest) -> OpenAIResult<Assistant>;
    async fn retrieve(&self, assistant_id: &str) -> OpenAIResult<Assistant>;
    async fn modify(
        &self,
        assistant_id: &str,
        request: ModifyAssistantRequest,
    ) -> OpenAIResult<Assistant>;
    async fn delete(&self, assistant_id: &str) -> OpenAIResult<DeletionStatus>;
    async fn list(&self, params: ListParams) -> OpenAIResult<ListResponse<Assistant>>;

    async fn create_file(&self, assistant_id: &str, file_id: &str) -> OpenAIResult<AssistantFile>;
    async fn retrieve_file(
        &self,
        assistant_id: &str,
        file_id: &str,
    ) -> OpenAIResult<AssistantFile>;
    async fn delete_file(&self, assistant_id: &str, file_id: &str)
        -> OpenAIResult<DeletionStatus>;
    async fn list_files(
        &self,
        assistant_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<AssistantFile>>;
}

pub struct AssistantServiceImpl {
    context: ServiceContext,
}

impl AssistantServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth_manager: Arc<dyn AuthManager>) -> Self {
        Self {
            context: ServiceContext::assistants(transport, auth_manager),
        }
    }

    pub fn with_assistants_version(mut self, version: impl Into<String>) -> Self {
        self.context = self.context.with_assistants_beta(version);
        self
    }
}

#[async_trait]
impl AssistantService for AssistantServiceImpl {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn create(&self, request: CreateAssistantRequest) -> OpenAIResult<Assistant> {
        let assistant: Assistant = self
            .context
            .execute(HttpRequest::post("/assistants").json(&request)?)
            .await?;
        tracing::info!(assistant_id = %assistant.id, "assistant created");
        Ok(assistant)
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, assistant_id: &str) -> OpenAIResult<Assistant> {
        require_id("assistant_id", assistant_id)?;
        self.context
            .execute(HttpRequest::get(format!("/assistants/{}", assistant_id)))
            .await
    }

    #[instrument(skip(self, request))]
    async fn modify(
        &self,
        assistant_id: &str,
        request: ModifyAssistantRequest,
    ) -> OpenAIResult<Assistant> {
        require_id("assistant_id", assistant_id)?;
        self.context
            .execute(HttpRequest::post(format!("/assistants/{}", assistant_id)).json(&request)?)
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, assistant_id: &str) -> OpenAIResult<DeletionStatus> {
        require_id("assistant_id", assistant_id)?;
        let status: DeletionStatus = self
            .context
            .execute(HttpRequest::delete(format!("/assistants/{}", assistant_id)))
            .await?;
        tracing::info!(deleted = status.deleted, "assistant deleted");
        Ok(status)
    }

    #[instrument(skip(self))]
    async fn list(&self, params: ListParams) -> OpenAIResult<ListResponse<Assistant>> {
        self.context
            .execute(HttpRequest::get("/assistants").queries(params.to_query()))
            .await
    }

    #[instrument(skip(self))]
    async fn create_file(&self, assistant_id: &str, file_id: &str) -> OpenAIResult<AssistantFile> {
        require_id("assistant_id", assistant_id)?;
        require_id("file_id", file_id)?;
        self.context
            .execute(
                HttpRequest::post(format!("/assistants/{}/files", assistant_id))
                    .json(&CreateAssistantFileRequest { file_id })?,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn retrieve_file(
        &self,
        assistant_id: &str,
        file_id: &str,
    ) -> OpenAIResult<AssistantFile> {
        require_id("assistant_id", assistant_id)?;
        require_id("file_id", file_id)?;
        self.context
            .execute(HttpRequest::get(format!(
                "/assistants/{}/files/{}",
                assistant_id, file_id
            )))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_file(
        &self,
        assistant_id: &str,
        file_id: &str,
    ) -> OpenAIResult<DeletionStatus> {
        require_id("assistant_id", assistant_id)?;
        require_id("file_id", file_id)?;
        self.context
            .execute(HttpRequest::delete(format!(
                "/assistants/{}/files/{}",
                assistant_id, file_id
            )))
            .await
    }

    #[instrument(skip(self))]
    async fn list_files(
        &self,
        assistant_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<AssistantFile>> {
        require_id("assistant_id", assistant_id)?;
        self.context
            .execute(
                HttpRequest::get(format!("/assistants/{}/files", assistant_id))
                    .queries(params.to_query()),
            )
            .await
    }
}
