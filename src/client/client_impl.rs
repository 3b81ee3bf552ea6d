use crate::auth::AuthManager;
use crate::client::{OpenAIClient, OpenAIConfig};
use crate::services::assistants::{
    AssistantService, AssistantServiceImpl, MessageService, MessageServiceImpl, RunService,
    RunServiceImpl, ThreadService, ThreadServiceImpl,
};
use crate::services::files::{FileService, FileServiceImpl};
use crate::services::images::{ImageService, ImageServiceImpl};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct OpenAIClientImpl {
    config: OpenAIConfig,

    assistants_service: AssistantServiceImpl,
    threads_service: ThreadServiceImpl,
    messages_service: MessageServiceImpl,
    runs_service: RunServiceImpl,
    files_service: FileServiceImpl,
    images_service: ImageServiceImpl,
}

impl OpenAIClientImpl {
    pub fn new(
        config: OpenAIConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let version = config.assistants_version.clone();

        let assistants_service =
            AssistantServiceImpl::new(transport.clone(), auth_manager.clone())
                .with_assistants_version(version.clone());

        let threads_service = ThreadServiceImpl::new(transport.clone(), auth_manager.clone())
            .with_assistants_version(version.clone());

        let messages_service = MessageServiceImpl::new(transport.clone(), auth_manager.clone())
            .with_assistants_version(version.clone());

        let runs_service = RunServiceImpl::new(transport.clone(), auth_manager.clone())
            .with_assistants_version(version);

        let files_service = FileServiceImpl::new(transport.clone(), auth_manager.clone());

        let images_service = ImageServiceImpl::new(transport, auth_manager);

        Self {
            config,
            assistants_service,
            threads_service,
            messages_service,
            runs_service,
            files_service,
            images_service,
        }
    }
}

impl OpenAIClient for OpenAIClientImpl {
    fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn assistants(&self) -> &dyn AssistantService {
        &self.assistants_service
    }

    fn threads(&self) -> &dyn ThreadService {
        &self.threads_service
    }

    fn messages(&self) -> &dyn MessageService {
        &self.messages_service
    }

    fn runs(&self) -> &dyn RunService {
        &self.runs_service
    }

    fn files(&self) -> &dyn FileService {
        &self.files_service
    }

    fn images(&self) -> &dyn ImageService {
        &self.images_service
    }
}
