mod messages;
mod runs;
mod service;
mod threads;
mod types;


pub use messages::{
    Annotation, CreateMessageRequest, FileCitation, FilePath, ImageFileContent, Message,
    MessageContent, MessageFile, MessageRole, MessageService, MessageServiceImpl, TextContent,
};
pub use runs::{
    CodeInterpreterCall, CodeInterpreterImage, CodeInterpreterOutput, CreateRunRequest,
    CreateThreadAndRunRequest, FunctionCall, LastError, MessageCreation, RequiredAction, Run,
    RunService, RunServiceImpl, RunStatus, RunStep, RunStepStatus, RunStepType, StepDetails,
    StepFunctionCall, StepToolCall, SubmitToolOutputs, ToolCall, ToolOutput,
};
pub use service::{AssistantService, AssistantServiceImpl};
pub use threads::{CreateThreadRequest, Thread, ThreadService, ThreadServiceImpl};
pub use types::{
    Assistant, AssistantFile, AssistantTool, CreateAssistantRequest, FunctionDefinition,
    ModifyAssistantRequest,
};
