//! Multipart form plumbing
//!
//! Drains a multipart body into text fields and file uploads. Missing text
//! fields read back as empty strings so the domain-level required checks
//! see one uniform shape.

use std::collections::HashMap;

use axum::extract::Multipart;

use super::error::ApiError;

/// A file part as received from the client, before any validation.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// All parts of a submission body.
#[derive(Debug, Default)]
pub struct FormBody {
    texts: HashMap<String, String>,
    files: HashMap<String, RawUpload>,
}

impl FormBody {
    /// Drain the multipart stream. A part with a file name is treated as an
    /// upload; an upload with an empty body counts as not supplied (that is
    /// what an untouched file input serializes to).
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut body = FormBody::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::warn!("Failed to read multipart field: {}", e);
            ApiError::Validation("Malformed form data".to_string())
        })? {
            let Some(name) = field.name().map(str::to_string) else {
                tracing::warn!("Skipping multipart field with no name");
                continue;
            };

            if let Some(file_name) = field.file_name().map(str::to_string) {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::warn!("Failed to read upload {}: {}", name, e);
                    ApiError::Validation("Malformed form data".to_string())
                })?;
                if !data.is_empty() {
                    body.files.insert(
                        name,
                        RawUpload {
                            file_name,
                            content_type,
                            data: data.to_vec(),
                        },
                    );
                }
            } else {
                let value = field.text().await.map_err(|e| {
                    tracing::warn!("Failed to read field {}: {}", name, e);
                    ApiError::Validation("Malformed form data".to_string())
                })?;
                body.texts.insert(name, value);
            }
        }

        Ok(body)
    }

    /// Text field value, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.texts.get(name).cloned().unwrap_or_default()
    }

    /// File upload, `None` when absent or empty.
    pub fn file(&self, name: &str) -> Option<&RawUpload> {
        self.files.get(name)
    }
}
