use crate::client::OpenAIClient;
use crate::errors::{OpenAIResult, ResultExt};
use crate::services::assistants::Assistant;
use crate::services::files::{FileObject, FilePurpose};
use crate::types::{ListParams, SortOrder};
use std::sync::Arc;

/// Account-wide listings.
#[derive(Clone)]
pub struct Organization {
    client: Arc<dyn OpenAIClient>,
}

impl Organization {
    pub fn new(client: Arc<dyn OpenAIClient>) -> Self {
        Self { client }
    }

    /// Uses the process-wide client from [`crate::client::shared`].
    pub fn from_env() -> OpenAIResult<Self> {
        Ok(Self::new(crate::client::shared()?))
    }

    pub fn client(&self) -> &dyn OpenAIClient {
        self.client.as_ref()
    }

    pub async fn list_files(&self, purpose: Option<FilePurpose>) -> OpenAIResult<Vec<FileObject>> {
        let page = self
            .client
            .files()
            .list(purpose)
            .await
            .context("list files")?;
        Ok(page.data)
    }

    pub async fn list_assistants(
        &self,
        order: SortOrder,
        limit: u32,
    ) -> OpenAIResult<Vec<Assistant>> {
        let params = ListParams::new().with_order(order).with_limit(limit);
        let page = self
            .client
            .assistants()
            .list(params)
            .await
            .context("list assistants")?;
        Ok(page.data)
    }
}
