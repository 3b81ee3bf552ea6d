mod client_impl;
mod config;
mod factory;

pub use client_impl::OpenAIClientImpl;
pub use config::{OpenAIConfig, DEFAULT_ASSISTANTS_VERSION, DEFAULT_BASE_URL};
pub use factory::OpenAIClientBuilder;

use crate::errors::OpenAIResult;
use crate::services::assistants::{AssistantService, MessageService, RunService, ThreadService};
use crate::services::files::FileService;
use crate::services::images::ImageService;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub trait OpenAIClient: Send + Sync {
    fn config(&self) -> &OpenAIConfig;
    fn assistants(&self) -> &dyn AssistantService;
    fn threads(&self) -> &dyn ThreadService;
    fn messages(&self) -> &dyn MessageService;
    fn runs(&self) -> &dyn RunService;
    fn files(&self) -> &dyn FileService;
    fn images(&self) -> &dyn ImageService;
}

static SHARED: OnceCell<Arc<dyn OpenAIClient>> = OnceCell::new();

/// Process-wide client configured from the environment (and `.env`).
///
/// The first successful call builds the client. Later calls return the same
/// instance. A failed build is not cached, so fixing the environment and
/// calling again works.
pub fn shared() -> OpenAIResult<Arc<dyn OpenAIClient>> {
    SHARED
        .get_or_try_init(|| {
            let config = OpenAIConfig::from_dotenv()?;
            tracing::debug!(base_url = %config.base_url, "initialising shared client");
            OpenAIClientBuilder::new().with_config(config).build()
        })
        .cloned()
}
