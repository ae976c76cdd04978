//! Attachment rules
//!
//! Uploads are restricted to PDF and Word documents of at most 5 MiB. The
//! declared MIME type is a courtesy check only; the authoritative check on
//! the server re-derives the type from the file's byte signature so a
//! relabeled upload is still rejected.

/// Upload size cap. A file of exactly this size is accepted.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Document types accepted as attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Doc,
    Docx,
}

impl FileKind {
    /// The MIME type this kind is declared with.
    pub fn mime_type(self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Doc => "application/msword",
            FileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Map a declared MIME type to a kind, if it is in the allowed set.
    pub fn from_declared_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(FileKind::Pdf),
            "application/msword" => Some(FileKind::Doc),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(FileKind::Docx)
            }
            _ => None,
        }
    }

    /// Derive the kind from the file's leading bytes.
    ///
    /// PDF files start with `%PDF`, legacy Word documents with the OLE
    /// compound-file magic, and DOCX (like any OOXML package) with a ZIP
    /// local-file header. Returns `None` when no allowed signature matches.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

        if bytes.starts_with(b"%PDF") {
            Some(FileKind::Pdf)
        } else if bytes.starts_with(&OLE_MAGIC) {
            Some(FileKind::Doc)
        } else if bytes.starts_with(b"PK\x03\x04") {
            Some(FileKind::Docx)
        } else {
            None
        }
    }
}
