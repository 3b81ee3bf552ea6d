use crate::client::OpenAIClient;
use crate::errors::{OpenAIResult, ResultExt};
use crate::services::assistants::{Run, RunStatus, RunStep, ToolOutput};
use crate::types::{ListParams, ListResponse, Metadata};
use std::time::Duration;

impl Run {
    pub async fn fetch(
        client: &dyn OpenAIClient,
        thread_id: &str,
        run_id: &str,
    ) -> OpenAIResult<Self> {
        client
            .runs()
            .retrieve(thread_id, run_id)
            .await
            .context("retrieve run")
    }

    pub async fn refresh(&mut self, client: &dyn OpenAIClient) -> OpenAIResult<()> {
        *self = Self::fetch(client, &self.thread_id, &self.id).await?;
        Ok(())
    }

    pub async fn update_metadata(
        &mut self,
        client: &dyn OpenAIClient,
        metadata: Metadata,
    ) -> OpenAIResult<()> {
        *self = client
            .runs()
            .modify(&self.thread_id, &self.id, metadata)
            .await
            .context("modify run")?;
        Ok(())
    }

    pub async fn cancel(&mut self, client: &dyn OpenAIClient) -> OpenAIResult<()> {
        *self = client
            .runs()
            .cancel(&self.thread_id, &self.id)
            .await
            .context("cancel run")?;
        Ok(())
    }

    pub async fn submit_tool_outputs(
        &mut self,
        client: &dyn OpenAIClient,
        tool_outputs: Vec<ToolOutput>,
    ) -> OpenAIResult<()> {
        *self = client
            .runs()
            .submit_tool_outputs(&self.thread_id, &self.id, tool_outputs)
            .await
            .context("submit tool outputs")?;
        Ok(())
    }

    pub async fn step(&self, client: &dyn OpenAIClient, step_id: &str) -> OpenAIResult<RunStep> {
        client
            .runs()
            .retrieve_step(&self.thread_id, &self.id, step_id)
            .await
            .context("retrieve run step")
    }

    pub async fn steps(
        &self,
        client: &dyn OpenAIClient,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<RunStep>> {
        client
            .runs()
            .list_steps(&self.thread_id, &self.id, params)
            .await
            .context("list run steps")
    }

    /// Re-reads the run every `interval` until it finishes or needs tool
    /// outputs. A failed read ends the wait.
    pub async fn wait_until_settled(
        &mut self,
        client: &dyn OpenAIClient,
        interval: Duration,
    ) -> OpenAIResult<RunStatus> {
        while !self.status.is_settled() {
            tracing::debug!(run_id = %self.id, status = ?self.status, "waiting for run");
            tokio::time::sleep(interval).await;
            *self = client
                .runs()
                .retrieve(&self.thread_id, &self.id)
                .await
                .context("poll run")?;
        }
        Ok(self.status)
    }
}
