use crate::auth::AuthManager;
use crate::errors::OpenAIResult;
use crate::services::assistants::CreateMessageRequest;
use crate::services::context::{require_id, ServiceContext};
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::{null_as_default, DeletionStatus, Metadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateThreadRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CreateMessageRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateThreadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: CreateMessageRequest) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MetadataUpdate<'a> {
    pub metadata: &'a Metadata,
}

#[async_trait]
pub trait ThreadService: Send + Sync {
    async fn create(&self, request: CreateThreadRequest) -> OpenAIResult<Thread>;
    async fn retrieve(&self, thread_id: &str) -> OpenAIResult<Thread>;
    async fn modify(&self, thread_id: &str, metadata: Metadata) -> OpenAIResult<Thread>;
    async fn delete(&self, thread_id: &str) -> OpenAIResult<DeletionStatus>;
}

pub struct ThreadServiceImpl {
    context: ServiceContext,
}

impl ThreadServiceImpl {
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
impl ThreadService for ThreadServiceImpl {
    #[instrument(skip(self, request), fields(messages = request.messages.len()))]
    async fn create(&self, request: CreateThreadRequest) -> OpenAIResult<Thread> {
        let thread: Thread = self
            .context
            .execute(HttpRequest::post("/threads").json(&request)?)
            .await?;
        tracing::info!(thread_id = %thread.id, "thread created");
        Ok(thread)
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, thread_id: &str) -> OpenAIResult<Thread> {
        require_id("thread_id", thread_id)?;
        self.context
            .execute(HttpRequest::get(format!("/threads/{}", thread_id)))
            .await
    }

    #[instrument(skip(self, metadata))]
    async fn modify(&self, thread_id: &str, metadata: Metadata) -> OpenAIResult<Thread> {
        require_id("thread_id", thread_id)?;
        self.context
            .execute(
                HttpRequest::post(format!("/threads/{}", thread_id))
                    .json(&MetadataUpdate { metadata: &metadata })?,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, thread_id: &str) -> OpenAIResult<DeletionStatus> {
        require_id("thread_id", thread_id)?;
        let status: DeletionStatus = self
            .context
            .execute(HttpRequest::delete(format!("/threads/{}", thread_id)))
            .await?;
        tracing::info!(deleted = status.deleted, "thread deleted");
        Ok(status)
    }
}
