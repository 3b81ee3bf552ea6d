use crate::errors::{OpenAIError, OpenAIResult};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileObject {
    pub id: String,
    pub object: String,
    pub bytes: u64,
    pub created_at: i64,
    pub filename: String,
    /// Kept as the raw string so purposes this crate does not model still parse.
    pub purpose: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_details: Option<String>,
}

impl FileObject {
    pub fn purpose(&self) -> Option<FilePurpose> {
        self.purpose.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilePurpose {
    #[serde(rename = "fine-tune")]
    FineTune,
    #[serde(rename = "fine-tune-results")]
    FineTuneResults,
    #[serde(rename = "assistants")]
    Assistants,
    #[serde(rename = "assistants_output")]
    AssistantsOutput,
}

impl FilePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePurpose::FineTune => "fine-tune",
            FilePurpose::FineTuneResults => "fine-tune-results",
            FilePurpose::Assistants => "assistants",
            FilePurpose::AssistantsOutput => "assistants_output",
        }
    }
}

impl fmt::Display for FilePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilePurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fine-tune" => Ok(FilePurpose::FineTune),
            "fine-tune-results" => Ok(FilePurpose::FineTuneResults),
            "assistants" => Ok(FilePurpose::Assistants),
            "assistants_output" => Ok(FilePurpose::AssistantsOutput),
            other => Err(format!("unknown file purpose '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileUploadRequest {
    pub file_data: Bytes,
    pub filename: String,
    pub purpose: FilePurpose,
}

impl FileUploadRequest {
    pub fn new(file_data: impl Into<Bytes>, filename: impl Into<String>, purpose: FilePurpose) -> Self {
        Self {
            file_data: file_data.into(),
            filename: filename.into(),
            purpose,
        }
    }

    /// Reads `path` from disk. The last path component becomes the filename.
    pub async fn from_path(path: impl AsRef<Path>, purpose: FilePurpose) -> OpenAIResult<Self> {
        let path = path.as_ref();
        let file_data = read_file(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(file_data, filename, purpose))
    }
}

pub(crate) async fn read_file(path: &Path) -> OpenAIResult<Bytes> {
    tokio::fs::read(path)
        .await
        .map(Bytes::from)
        .map_err(|e| OpenAIError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}
