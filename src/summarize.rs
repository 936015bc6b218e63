//! Eager (one-shot) summarization entry points.
//!
//! These wrap the full select → upload flow for callers that do not need
//! the interactive [`crate::session::Session`] layer: validate the document,
//! POST it, hand back the [`Summary`]. The session exists for drivers that
//! render state between steps; these functions exist for everyone else.

use crate::config::UploadConfig;
use crate::error::DocSumError;
use crate::pipeline::{input, upload::SummaryClient};
use crate::summary::{Summary, SummaryVariant};
use std::path::Path;
use tracing::info;

/// Validate a document and upload it for summarization.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input_path` — Path to a PDF, PNG, or JPEG document
/// * `config` — Upload configuration
///
/// # Errors
/// Validation errors surface before any network I/O; see
/// [`DocSumError`] for the full taxonomy.
pub async fn summarize(
    input_path: impl AsRef<Path>,
    config: &UploadConfig,
) -> Result<Summary, DocSumError> {
    let document = input::select_document(input_path, config)?;
    let client = SummaryClient::new(config)?;
    let summary = client.upload(document).await?;
    info!("Summarization complete");
    Ok(summary)
}

/// Summarize and write one variant's text to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files. The
/// full summary is still returned so callers can show the other variants.
pub async fn summarize_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    variant: SummaryVariant,
    config: &UploadConfig,
) -> Result<Summary, DocSumError> {
    let summary = summarize(input_path, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DocSumError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("txt.tmp");
    tokio::fs::write(&tmp_path, summary.variant(variant))
        .await
        .map_err(|e| DocSumError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| DocSumError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(summary)
}

/// Synchronous wrapper around [`summarize`].
///
/// Creates a temporary tokio runtime internally.
pub fn summarize_sync(
    input_path: impl AsRef<Path>,
    config: &UploadConfig,
) -> Result<Summary, DocSumError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| DocSumError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(summarize(input_path, config))
}
