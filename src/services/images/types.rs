use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::files::read_file;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Size256,
    #[serde(rename = "512x512")]
    Size512,
    #[serde(rename = "1024x1024")]
    Size1024,
    #[serde(rename = "1792x1024")]
    Size1792x1024,
    #[serde(rename = "1024x1792")]
    Size1024x1792,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Size256 => "256x256",
            ImageSize::Size512 => "512x512",
            ImageSize::Size1024 => "1024x1024",
            ImageSize::Size1792x1024 => "1792x1024",
            ImageSize::Size1024x1792 => "1024x1792",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Standard,
    Hd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Vivid,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

impl ImageResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageResponseFormat::Url => "url",
            ImageResponseFormat::B64Json => "b64_json",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            n: None,
            quality: None,
            response_format: None,
            size: None,
            style: None,
            user: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Source image bytes plus the filename sent in the multipart part.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub data: Bytes,
    pub filename: String,
}

impl ImageInput {
    pub fn new(data: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
        }
    }

    /// A PNG held in memory.
    pub fn png(data: impl Into<Bytes>) -> Self {
        Self::new(data, "image.png")
    }

    pub async fn from_path(path: impl AsRef<Path>) -> OpenAIResult<Self> {
        let path = path.as_ref();
        let data = read_file(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.png".to_string());
        Ok(Self::new(data, filename))
    }
}

#[derive(Debug, Clone)]
pub struct ImageEditRequest {
    pub image: ImageInput,
    pub prompt: String,
    pub mask: Option<ImageInput>,
    pub model: Option<String>,
    pub n: Option<u32>,
    pub size: Option<ImageSize>,
    pub response_format: Option<ImageResponseFormat>,
    pub user: Option<String>,
}

impl ImageEditRequest {
    pub fn new(image: ImageInput, prompt: impl Into<String>) -> Self {
        Self {
            image,
            prompt: prompt.into(),
            mask: None,
            model: None,
            n: None,
            size: None,
            response_format: None,
            user: None,
        }
    }

    /// Reads the image, and the mask when given, from disk.
    pub async fn from_paths(
        image: impl AsRef<Path>,
        mask: Option<&Path>,
        prompt: impl Into<String>,
    ) -> OpenAIResult<Self> {
        let mut request = Self::new(ImageInput::from_path(image).await?, prompt);
        if let Some(mask) = mask {
            request.mask = Some(ImageInput::from_path(mask).await?);
        }
        Ok(request)
    }

    pub fn with_mask(mut self, mask: ImageInput) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ImageVariationRequest {
    pub image: ImageInput,
    pub model: Option<String>,
    pub n: Option<u32>,
    pub size: Option<ImageSize>,
    pub response_format: Option<ImageResponseFormat>,
    pub user: Option<String>,
}

impl ImageVariationRequest {
    pub fn new(image: ImageInput) -> Self {
        Self {
            image,
            model: None,
            n: None,
            size: None,
            response_format: None,
            user: None,
        }
    }

    pub async fn from_path(image: impl AsRef<Path>) -> OpenAIResult<Self> {
        Ok(Self::new(ImageInput::from_path(image).await?))
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageResponse {
    pub created: i64,
    pub data: Vec<ImageData>,
}

impl ImageResponse {
    pub fn first(&self) -> Option<&ImageData> {
        self.data.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

impl ImageData {
    /// Decodes `b64_json`. Fails when the image was returned as a URL.
    pub fn decode_b64(&self) -> OpenAIResult<Bytes> {
        let encoded = self.b64_json.as_deref().ok_or_else(|| {
            OpenAIError::Validation(ValidationError::UnsupportedContent(
                "image has no b64_json payload".to_string(),
            ))
        })?;
        STANDARD
            .decode(encoded)
            .map(Bytes::from)
            .map_err(|e| OpenAIError::Deserialization(format!("invalid base64 image: {}", e)))
    }
}
