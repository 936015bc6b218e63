//! Document selection: resolve a user-supplied path and validate it.
//!
//! ## Why a declared-type check?
//!
//! The type check is by file extension only — the CLI analogue of a browser
//! trusting a file's declared MIME type. A renamed `.exe` with a `.pdf`
//! extension passes it. This is a known, documented limitation of the
//! client-side contract, not a bug: the trust boundary is the service, and
//! content-signature validation belongs on its side of the wire.
//!
//! The size cap is checked against `fs::metadata` *before* the bytes are
//! read, so an over-limit file is rejected without pulling it into memory.

use crate::config::UploadConfig;
use crate::error::DocSumError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Declared MIME types the service accepts.
pub const ALLOWED_TYPES: [&str; 3] = ["application/pdf", "image/png", "image/jpeg"];

/// A validated, in-memory document ready for upload.
///
/// Transient by design: a [`crate::session::Session`] drops it on the next
/// selection, and nothing is persisted.
#[derive(Debug, Clone)]
pub struct SelectedDocument {
    path: PathBuf,
    file_name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl SelectedDocument {
    /// Path the document was selected from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename sent with the multipart part.
    ///
    /// Spaces are replaced with underscores, matching what the service does
    /// to filenames on its side.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared MIME type (derived from the extension).
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Document size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// The document bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Map a file extension to its declared MIME type, if allow-listed.
fn declared_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Resolve and validate a document for upload.
///
/// Checks, in order: the file exists, its declared type is allow-listed,
/// and its size is within the cap (strict `>` — exactly at the cap passes).
/// Only then are the bytes read.
pub fn select_document(
    path: impl AsRef<Path>,
    config: &UploadConfig,
) -> Result<SelectedDocument, DocSumError> {
    let path = path.as_ref().to_path_buf();

    let meta = match std::fs::metadata(&path) {
        Ok(m) if m.is_file() => m,
        Ok(_) => return Err(DocSumError::FileNotFound { path }),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(DocSumError::PermissionDenied { path });
        }
        Err(_) => return Err(DocSumError::FileNotFound { path }),
    };

    let mime = declared_mime(&path).ok_or_else(|| DocSumError::UnsupportedType {
        path: path.clone(),
    })?;

    let size = meta.len();
    if size > config.max_document_bytes {
        return Err(DocSumError::FileTooLarge {
            path,
            size,
            limit: config.max_document_bytes,
        });
    }

    let bytes = std::fs::read(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            DocSumError::PermissionDenied { path: path.clone() }
        } else {
            DocSumError::Internal(format!("failed to read '{}': {e}", path.display()))
        }
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().replace(' ', "_"))
        .unwrap_or_else(|| "document".to_string());

    debug!(
        "Selected document: {} ({mime}, {size} bytes)",
        path.display()
    );

    Ok(SelectedDocument {
        path,
        file_name,
        mime,
        bytes,
    })
}
