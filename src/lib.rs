//! Typed async client for the OpenAI Assistants (v1 beta), Files and Images
//! APIs.
//!
//! Services live behind [`OpenAIClient`]. The [`resources`] module adds
//! methods on the returned objects that keep them in sync with the server.
//!
//! ```no_run
//! use gpt_manager::prelude::*;
//!
//! # async fn demo() -> OpenAIResult<()> {
//! let client = gpt_manager::client::shared()?;
//! let thread = Thread::create(client.as_ref(), CreateThreadRequest::new()).await?;
//! thread
//!     .post_message(client.as_ref(), CreateMessageRequest::user("What is 3x + 11 = 14?"))
//!     .await?;
//! let mut run = thread.run(client.as_ref(), "asst_abc123").await?;
//! run.wait_until_settled(client.as_ref(), std::time::Duration::from_secs(1))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod resources;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod mocks;

pub use client::{OpenAIClient, OpenAIClientBuilder, OpenAIClientImpl, OpenAIConfig};
pub use errors::{OpenAIError, OpenAIResult};
pub use resources::Organization;

pub use services::{
    assistants::{
        Assistant, AssistantFile, AssistantService, AssistantTool, CreateAssistantRequest,
        CreateMessageRequest, CreateRunRequest, CreateThreadAndRunRequest, CreateThreadRequest,
        Message, MessageContent, MessageFile, MessageRole, MessageService,
        ModifyAssistantRequest, Run, RunService, RunStatus, RunStep, Thread, ThreadService,
        ToolOutput,
    },
    files::{FileObject, FilePurpose, FileService, FileUploadRequest},
    images::{
        ImageData, ImageEditRequest, ImageGenerationRequest, ImageInput, ImageQuality,
        ImageResponse, ImageResponseFormat, ImageService, ImageSize, ImageStyle,
        ImageVariationRequest,
    },
};
pub use types::{DeletionStatus, ListParams, ListResponse, Metadata, SortOrder};

pub mod prelude {
    pub use crate::client::{OpenAIClient, OpenAIClientBuilder, OpenAIConfig};
    pub use crate::errors::{OpenAIError, OpenAIResult};
    pub use crate::resources::Organization;
    pub use crate::services::assistants::{
        Assistant, CreateAssistantRequest, CreateMessageRequest, CreateRunRequest,
        CreateThreadRequest, Message, Run, RunStatus, Thread, ToolOutput,
    };
    pub use crate::services::files::{FileObject, FilePurpose, FileUploadRequest};
    pub use crate::services::images::{ImageGenerationRequest, ImageResponse};
    pub use crate::types::{ListParams, SortOrder};
}
