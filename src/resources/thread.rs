use crate::client::OpenAIClient;
use crate::errors::{OpenAIResult, ResultExt};
use crate::services::assistants::{
    CreateMessageRequest, CreateRunRequest, CreateThreadRequest, Message, Run, Thread,
};
use crate::types::{DeletionStatus, ListParams, ListResponse, Metadata};

impl Thread {
    pub async fn create(
        client: &dyn OpenAIClient,
        request: CreateThreadRequest,
    ) -> OpenAIResult<Self> {
        client.threads().create(request).await.context("create thread")
    }

    pub async fn fetch(client: &dyn OpenAIClient, thread_id: &str) -> OpenAIResult<Self> {
        client
            .threads()
            .retrieve(thread_id)
            .await
            .context("retrieve thread")
    }

    pub async fn refresh(&mut self, client: &dyn OpenAIClient) -> OpenAIResult<()> {
        *self = Self::fetch(client, &self.id).await?;
        Ok(())
    }

    pub async fn update_metadata(
        &mut self,
        client: &dyn OpenAIClient,
        metadata: Metadata,
    ) -> OpenAIResult<()> {
        *self = client
            .threads()
            .modify(&self.id, metadata)
            .await
            .context("modify thread")?;
        Ok(())
    }

    pub async fn delete(self, client: &dyn OpenAIClient) -> OpenAIResult<DeletionStatus> {
        client.threads().delete(&self.id).await.context("delete thread")
    }

    pub async fn post_message(
        &self,
        client: &dyn OpenAIClient,
        request: CreateMessageRequest,
    ) -> OpenAIResult<Message> {
        client
            .messages()
            .create(&self.id, request)
            .await
            .context("create message")
    }

    pub async fn messages(
        &self,
        client: &dyn OpenAIClient,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<Message>> {
        client
            .messages()
            .list(&self.id, params)
            .await
            .context("list messages")
    }

    /// Starts a run of `assistant_id` on this thread with the assistant's
    /// own settings.
    pub async fn run(&self, client: &dyn OpenAIClient, assistant_id: &str) -> OpenAIResult<Run> {
        self.run_with(client, CreateRunRequest::new(assistant_id))
            .await
    }

    pub async fn run_with(
        &self,
        client: &dyn OpenAIClient,
        request: CreateRunRequest,
    ) -> OpenAIResult<Run> {
        client
            .runs()
            .create(&self.id, request)
            .await
            .context("create run")
    }
}
