//! Upload validation and scoped temp storage
//!
//! An upload passes three authoritative checks in order: declared MIME type,
//! byte-signature sniff, size cap. Accepted files are written to a private
//! temp location with a collision-resistant name; the file is removed when
//! the [`StoredUpload`] drops, on every exit path of the handler.

use std::io::Write;
use std::path::Path;

use formrelay_core::domain::attachment::{FileKind, MAX_UPLOAD_BYTES};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::forms::RawUpload;

/// Which upload slot is being validated; selects the user-facing wording.
#[derive(Debug, Clone, Copy)]
pub enum UploadLabel {
    Cv,
    CoverLetter,
}

impl UploadLabel {
    fn display(self) -> &'static str {
        match self {
            UploadLabel::Cv => "CV",
            UploadLabel::CoverLetter => "Cover letter",
        }
    }

    fn temp_prefix(self) -> &'static str {
        match self {
            UploadLabel::Cv => "cv",
            UploadLabel::CoverLetter => "cover",
        }
    }
}

/// An accepted upload persisted to a temp file for the attachment step.
#[derive(Debug)]
pub struct StoredUpload {
    file: NamedTempFile,
    pub file_name: String,
    pub kind: FileKind,
}

impl StoredUpload {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the stored bytes back for attachment.
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.path())
    }
}

/// Strip any client-supplied directory components from the file name.
fn base_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim()
        .to_string()
}

/// Run the full check sequence and persist the upload.
pub fn validate_and_store(raw: &RawUpload, label: UploadLabel) -> Result<StoredUpload, ApiError> {
    let name = label.display();

    // 1. Declared type must be in the allowed set. Not trusted on its own,
    //    but a wrong declaration is rejected outright.
    if FileKind::from_declared_mime(&raw.content_type).is_none() {
        return Err(ApiError::Validation(format!(
            "{} must be a PDF or Word document",
            name
        )));
    }

    // 2. Re-derive the type from the actual bytes; a relabeled file fails here.
    let Some(kind) = FileKind::sniff(&raw.data) else {
        return Err(ApiError::SniffMismatch(format!(
            "Invalid file format. {} must be a genuine PDF or Word document",
            name
        )));
    };

    // 3. Size cap; exactly MAX_UPLOAD_BYTES is accepted.
    if raw.data.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(ApiError::Validation(format!(
            "{} file size must be less than 5MB",
            name
        )));
    }

    let file_name = base_name(&raw.file_name);

    let mut file = tempfile::Builder::new()
        .prefix(&format!("{}_{}_", label.temp_prefix(), Uuid::new_v4()))
        .tempfile()
        .map_err(|e| {
            tracing::error!("Failed to create temp file for {}: {}", name, e);
            ApiError::FileMove(format!("Failed to process {} upload", name))
        })?;

    file.write_all(&raw.data).map_err(|e| {
        tracing::error!("Failed to write temp file for {}: {}", name, e);
        ApiError::FileMove(format!("Failed to process {} upload", name))
    })?;

    Ok(StoredUpload {
        file,
        file_name,
        kind,
    })
}
