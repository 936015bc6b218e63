//! Error types for the docsum library.
//!
//! Three failure families surface from an upload attempt:
//!
//! * Validation errors (`NoDocumentSelected`, `FileNotFound`,
//!   `UnsupportedType`, `FileTooLarge`) — detected before any network I/O
//!   and recoverable by selecting another file.
//! * `NoSummary` — the request succeeded but the body carried no usable
//!   summary object.
//! * `UploadFailed` / `ServerStatus` — transport failure or a non-2xx
//!   response from the service.
//!
//! All three are non-fatal to a [`crate::session::Session`]: they set its
//! single user-visible error string and leave it usable for another attempt.
//! Diagnostic detail (status codes, reqwest error text) is logged via
//! `tracing`, never shown raw to the end user.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the docsum library.
#[derive(Debug, Error)]
pub enum DocSumError {
    // ── Selection / validation errors ─────────────────────────────────────
    /// An upload was requested with no document selected.
    #[error("No document selected.\nPick a PDF, JPEG, or PNG file first.")]
    NoDocumentSelected,

    /// Input file was not found at the given path.
    #[error("Document not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file's declared type (by extension) is outside the allow-list.
    #[error(
        "Unsupported document type for '{path}'.\n\
         Only PDF and image files are supported (.pdf, .png, .jpg, .jpeg)."
    )]
    UnsupportedType { path: PathBuf },

    /// The file is larger than the configured size cap.
    #[error(
        "Document '{path}' is too large: {size} bytes (limit {limit} bytes).\n\
         Upload a smaller file."
    )]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    // ── Upload errors ─────────────────────────────────────────────────────
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Failed to upload to '{url}': {reason}\nCheck the service is reachable.")]
    UploadFailed { url: String, reason: String },

    /// The service answered with a non-success status.
    #[error("Summarization service returned HTTP {status}.\nTry again later.")]
    ServerStatus { status: u16 },

    /// The response arrived but carried no summary object.
    #[error("No summary generated. Please try again.")]
    NoSummary,

    /// A second upload was requested while one is already in flight.
    #[error("An upload is already in progress.")]
    UploadInFlight,

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocSumError {
    /// Whether the error was raised before any network I/O took place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DocSumError::NoDocumentSelected
                | DocSumError::FileNotFound { .. }
                | DocSumError::PermissionDenied { .. }
                | DocSumError::UnsupportedType { .. }
                | DocSumError::FileTooLarge { .. }
        )
    }
}
