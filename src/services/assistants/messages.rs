use crate::auth::AuthManager;
use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::assistants::threads::MetadataUpdate;
use crate::services::context::{require_id, ServiceContext};
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::{null_as_default, ListParams, ListResponse, Metadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub thread_id: String,
    pub role: MessageRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<MessageContent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_ids: Vec<String>,
    pub assistant_id: Option<String>,
    pub run_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

impl Message {
    /// All text parts joined by newlines. Image parts are skipped.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(MessageContent::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The first text part, or an error when the message only carries images.
    pub fn first_text(&self) -> OpenAIResult<&str> {
        self.content
            .iter()
            .find_map(MessageContent::as_text)
            .ok_or_else(|| {
                OpenAIError::Validation(ValidationError::UnsupportedContent(format!(
                    "message {} has no text content",
                    self.id
                )))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextContent },
    ImageFile { image_file: ImageFileContent },
}

impl MessageContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text { text } => Some(text.value.as_str()),
            MessageContent::ImageFile { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFileContent {
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    FileCitation {
        text: String,
        start_index: u32,
        end_index: u32,
        file_citation: FileCitation,
    },
    FilePath {
        text: String,
        start_index: u32,
        end_index: u32,
        file_path: FilePath,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCitation {
    pub file_id: String,
    #[serde(default)]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePath {
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFile {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMessageRequest {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateMessageRequest {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            file_ids: Vec::new(),
            metadata: None,
        }
    }

    pub fn with_file_ids<I, S>(mut self, file_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_ids = file_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub(crate) fn validate(&self) -> OpenAIResult<()> {
        if self.content.trim().is_empty() {
            return Err(OpenAIError::Validation(ValidationError::MissingRequiredField(
                "content".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
pub trait MessageService: Send + Sync {
    async fn create(&self, thread_id: &str, request: CreateMessageRequest)
        -> OpenAIResult<Message>;
    async fn retrieve(&self, thread_id: &str, message_id: &str) -> OpenAIResult<Message>;
    async fn modify(
        &self,
        thread_id: &str,
        message_id: &str,
        metadata: Metadata,
    ) -> OpenAIResult<Message>;
    async fn list(&self, thread_id: &str, params: ListParams)
        -> OpenAIResult<ListResponse<Message>>;

    async fn retrieve_file(
        &self,
        thread_id: &str,
        message_id: &str,
        file_id: &str,
    ) -> OpenAIResult<MessageFile>;
    async fn list_files(
        &self,
        thread_id: &str,
        message_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<MessageFile>>;
}

pub struct MessageServiceImpl {
    context: ServiceContext,
}

impl MessageServiceImpl {
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
impl MessageService for MessageServiceImpl {
    #[instrument(skip(self, request))]
    async fn create(
        &self,
        thread_id: &str,
        request: CreateMessageRequest,
    ) -> OpenAIResult<Message> {
        require_id("thread_id", thread_id)?;
        request.validate()?;
        self.context
            .execute(
                HttpRequest::post(format!("/threads/{}/messages", thread_id)).json(&request)?,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, thread_id: &str, message_id: &str) -> OpenAIResult<Message> {
        require_id("thread_id", thread_id)?;
        require_id("message_id", message_id)?;
        self.context
            .execute(HttpRequest::get(format!(
                "/threads/{}/messages/{}",
                thread_id, message_id
            )))
            .await
    }

    #[instrument(skip(self, metadata))]
    async fn modify(
        &self,
        thread_id: &str,
        message_id: &str,
        metadata: Metadata,
    ) -> OpenAIResult<Message> {
        require_id("thread_id", thread_id)?;
        require_id("message_id", message_id)?;
        self.context
            .execute(
                HttpRequest::post(format!("/threads/{}/messages/{}", thread_id, message_id))
                    .json(&MetadataUpdate { metadata: &metadata })?,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        thread_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<Message>> {
        require_id("thread_id", thread_id)?;
        self.context
            .execute(
                HttpRequest::get(format!("/threads/{}/messages", thread_id))
                    .queries(params.to_query()),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn retrieve_file(
        &self,
        thread_id: &str,
        message_id: &str,
        file_id: &str,
    ) -> OpenAIResult<MessageFile> {
        require_id("thread_id", thread_id)?;
        require_id("message_id", message_id)?;
        require_id("file_id", file_id)?;
        self.context
            .execute(HttpRequest::get(format!(
                "/threads/{}/messages/{}/files/{}",
                thread_id, message_id, file_id
            )))
            .await
    }

    #[instrument(skip(self))]
    async fn list_files(
        &self,
        thread_id: &str,
        message_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<MessageFile>> {
        require_id("thread_id", thread_id)?;
        require_id("message_id", message_id)?;
        self.context
            .execute(
                HttpRequest::get(format!(
                    "/threads/{}/messages/{}/files",
                    thread_id, message_id
                ))
                .queries(params.to_query()),
            )
            .await
    }
}
