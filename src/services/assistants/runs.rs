use crate::auth::AuthManager;
use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::assistants::threads::MetadataUpdate;
use crate::services::assistants::{AssistantTool, CreateThreadRequest};
use crate::services::context::{require_id, ServiceContext};
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::{null_as_default, ListParams, ListResponse, Metadata, Usage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub thread_id: String,
    pub assistant_id: String,
    pub status: RunStatus,
    pub required_action: Option<RequiredAction>,
    pub last_error: Option<LastError>,
    pub expires_at: Option<i64>,
    pub started_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub failed_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub model: String,
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<AssistantTool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl Run {
    /// Tool calls the run is waiting on. Empty unless the status is
    /// `requires_action`.
    pub fn pending_tool_calls(&self) -> &[ToolCall] {
        self.required_action
            .as_ref()
            .map(|action| action.submit_tool_outputs.tool_calls.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Expired,
}

impl RunStatus {
    /// The run will never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Cancelled | RunStatus::Failed | RunStatus::Completed | RunStatus::Expired
        )
    }

    /// The run is waiting on the caller or has finished.
    pub fn is_settled(&self) -> bool {
        self.is_terminal() || *self == RunStatus::RequiresAction
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub submit_tool_outputs: SubmitToolOutputs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitToolOutputs {
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStep {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub run_id: String,
    pub assistant_id: String,
    pub thread_id: String,
    #[serde(rename = "type")]
    pub step_type: RunStepType,
    pub status: RunStepStatus,
    pub cancelled_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub expired_at: Option<i64>,
    pub failed_at: Option<i64>,
    pub last_error: Option<LastError>,
    pub step_details: StepDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStepType {
    MessageCreation,
    ToolCalls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStepStatus {
    InProgress,
    Cancelled,
    Failed,
    Completed,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepDetails {
    MessageCreation { message_creation: MessageCreation },
    ToolCalls { tool_calls: Vec<StepToolCall> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCreation {
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepToolCall {
    CodeInterpreter {
        id: String,
        code_interpreter: CodeInterpreterCall,
    },
    Retrieval {
        id: String,
        #[serde(default)]
        retrieval: serde_json::Value,
    },
    Function {
        id: String,
        function: StepFunctionCall,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeInterpreterCall {
    pub input: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outputs: Vec<CodeInterpreterOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CodeInterpreterOutput {
    Logs { logs: String },
    Image { image: CodeInterpreterImage },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInterpreterImage {
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFunctionCall {
    pub name: String,
    pub arguments: String,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRunRequest {
    pub assistant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<AssistantTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateRunRequest {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_additional_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = Some(instructions.into());
        self
    }

    pub fn with_tools(mut self, tools: Vec<AssistantTool>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateThreadAndRunRequest {
    pub assistant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<CreateThreadRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<AssistantTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateThreadAndRunRequest {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            ..Default::default()
        }
    }

    pub fn with_thread(mut self, thread: CreateThreadRequest) -> Self {
        self.thread = Some(thread);
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

impl ToolOutput {
    pub fn new(tool_call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SubmitToolOutputsRequest<'a> {
    tool_outputs: &'a [ToolOutput],
}

#[async_trait]
pub trait RunService: Send + Sync {
    async fn create(&self, thread_id: &str, request: CreateRunRequest) -> OpenAIResult<Run>;
    async fn retrieve(&self, thread_id: &str, run_id: &str) -> OpenAIResult<Run>;
    async fn modify(&self, thread_id: &str, run_id: &str, metadata: Metadata)
        -> OpenAIResult<Run>;
    async fn list(&self, thread_id: &str, params: ListParams) -> OpenAIResult<ListResponse<Run>>;
    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        tool_outputs: Vec<ToolOutput>,
    ) -> OpenAIResult<Run>;
    async fn cancel(&self, thread_id: &str, run_id: &str) -> OpenAIResult<Run>;
    async fn create_thread_and_run(&self, request: CreateThreadAndRunRequest)
        -> OpenAIResult<Run>;

    async fn retrieve_step(
        &self,
        thread_id: &str,
        run_id: &str,
        step_id: &str,
    ) -> OpenAIResult<RunStep>;
    async fn list_steps(
        &self,
        thread_id: &str,
        run_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<RunStep>>;
}

pub struct RunServiceImpl {
    context: ServiceContext,
}

impl RunServiceImpl {
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
impl RunService for RunServiceImpl {
    #[instrument(skip(self, request), fields(assistant_id = %request.assistant_id))]
    async fn create(&self, thread_id: &str, request: CreateRunRequest) -> OpenAIResult<Run> {
        require_id("thread_id", thread_id)?;
        require_id("assistant_id", &request.assistant_id)?;
        let run: Run = self
            .context
            .execute(HttpRequest::post(format!("/threads/{}/runs", thread_id)).json(&request)?)
            .await?;
        tracing::info!(run_id = %run.id, status = ?run.status, "run created");
        Ok(run)
    }

    #[instrument(skip(self))]
    async fn retrieve(&self, thread_id: &str, run_id: &str) -> OpenAIResult<Run> {
        require_id("thread_id", thread_id)?;
        require_id("run_id", run_id)?;
        let run: Run = self
            .context
            .execute(HttpRequest::get(format!("/threads/{}/runs/{}", thread_id, run_id)))
            .await?;
        tracing::debug!(status = ?run.status, "run retrieved");
        Ok(run)
    }

    #[instrument(skip(self, metadata))]
    async fn modify(
        &self,
        thread_id: &str,
        run_id: &str,
        metadata: Metadata,
    ) -> OpenAIResult<Run> {
        require_id("thread_id", thread_id)?;
        require_id("run_id", run_id)?;
        self.context
            .execute(
                HttpRequest::post(format!("/threads/{}/runs/{}", thread_id, run_id))
                    .json(&MetadataUpdate { metadata: &metadata })?,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn list(&self, thread_id: &str, params: ListParams) -> OpenAIResult<ListResponse<Run>> {
        require_id("thread_id", thread_id)?;
        self.context
            .execute(
                HttpRequest::get(format!("/threads/{}/runs", thread_id))
                    .queries(params.to_query()),
            )
            .await
    }

    #[instrument(skip(self, tool_outputs), fields(outputs = tool_outputs.len()))]
    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        tool_outputs: Vec<ToolOutput>,
    ) -> OpenAIResult<Run> {
        require_id("thread_id", thread_id)?;
        require_id("run_id", run_id)?;
        if tool_outputs.is_empty() {
            return Err(OpenAIError::Validation(ValidationError::MissingRequiredField(
                "tool_outputs".to_string(),
            )));
        }
        self.context
            .execute(
                HttpRequest::post(format!(
                    "/threads/{}/runs/{}/submit_tool_outputs",
                    thread_id, run_id
                ))
                .json(&SubmitToolOutputsRequest {
                    tool_outputs: &tool_outputs,
                })?,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn cancel(&self, thread_id: &str, run_id: &str) -> OpenAIResult<Run> {
        require_id("thread_id", thread_id)?;
        require_id("run_id", run_id)?;
        let run: Run = self
            .context
            .execute(HttpRequest::post(format!(
                "/threads/{}/runs/{}/cancel",
                thread_id, run_id
            )))
            .await?;
        tracing::info!(status = ?run.status, "run cancel requested");
        Ok(run)
    }

    #[instrument(skip(self, request), fields(assistant_id = %request.assistant_id))]
    async fn create_thread_and_run(
        &self,
        request: CreateThreadAndRunRequest,
    ) -> OpenAIResult<Run> {
        require_id("assistant_id", &request.assistant_id)?;
        let run: Run = self
            .context
            .execute(HttpRequest::post("/threads/runs").json(&request)?)
            .await?;
        tracing::info!(run_id = %run.id, thread_id = %run.thread_id, "thread and run created");
        Ok(run)
    }

    #[instrument(skip(self))]
    async fn retrieve_step(
        &self,
        thread_id: &str,
        run_id: &str,
        step_id: &str,
    ) -> OpenAIResult<RunStep> {
        require_id("thread_id", thread_id)?;
        require_id("run_id", run_id)?;
        require_id("step_id", step_id)?;
        self.context
            .execute(HttpRequest::get(format!(
                "/threads/{}/runs/{}/steps/{}",
                thread_id, run_id, step_id
            )))
            .await
    }

    #[instrument(skip(self))]
    async fn list_steps(
        &self,
        thread_id: &str,
        run_id: &str,
        params: ListParams,
    ) -> OpenAIResult<ListResponse<RunStep>> {
        require_id("thread_id", thread_id)?;
        require_id("run_id", run_id)?;
        self.context
            .execute(
                HttpRequest::get(format!("/threads/{}/runs/{}/steps", thread_id, run_id))
                    .queries(params.to_query()),
            )
            .await
    }
}
