use crate::errors::{OpenAIError, OpenAIResult};
use bytes::Bytes;
use mime::Mime;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// A `multipart/form-data` body held as plain values.
///
/// The transport turns it into a [`reqwest::multipart::Form`] when the request
/// is sent, so requests stay cloneable and mocks can inspect every part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        data: Bytes,
    },
}

impl MultipartPart {
    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Text { name, .. } | MultipartPart::File { name, .. } => name,
        }
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Adds a text field only when a value is present.
    pub fn text_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.text(name, value.to_string()),
            None => self,
        }
    }

    /// Adds a file field. The content type is guessed from the file name.
    pub fn file(mut self, name: &str, filename: &str, data: Bytes) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.to_string(),
            filename: filename.to_string(),
            content_type: mime_for_filename(filename).to_string(),
            data,
        });
        self
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&MultipartPart> {
        self.parts.iter().find(|part| part.name() == name)
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.part(name)? {
            MultipartPart::Text { value, .. } => Some(value),
            MultipartPart::File { .. } => None,
        }
    }

    /// Builds the reqwest form that is written to the wire.
    pub fn into_form(self) -> OpenAIResult<Form> {
        let mut form = Form::new();

        for part in self.parts {
            form = match part {
                MultipartPart::Text { name, value } => form.text(name, value),
                MultipartPart::File {
                    name,
                    filename,
                    content_type,
                    data,
                } => {
                    let part = Part::bytes(data.to_vec())
                        .file_name(filename)
                        .mime_str(&content_type)
                        .map_err(|e| {
                            OpenAIError::Serialization(format!(
                                "Invalid content type {}: {}",
                                content_type, e
                            ))
                        })?;
                    form.part(name, part)
                }
            };
        }

        Ok(form)
    }
}

pub(crate) fn mime_for_filename(filename: &str) -> Mime {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("json") => mime::APPLICATION_JSON,
        Some("pdf") => mime::APPLICATION_PDF,
        Some("txt") | Some("md") => mime::TEXT_PLAIN,
        Some("csv") => mime::TEXT_CSV,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
