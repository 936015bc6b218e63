//! Upload stage: POST the document to the service as multipart form data.
//!
//! The service contract is a single form field named `document`, filename
//! and declared MIME type preserved, answered with
//! `{"summary": {"short": ..., "medium": ..., "long": ...}}`. Anything else —
//! transport failure, non-2xx status, or a body without a usable summary —
//! maps onto one of the upload errors in [`crate::error::DocSumError`].
//!
//! No retry and no backoff: the caller retries by clicking again.

use crate::config::UploadConfig;
use crate::error::DocSumError;
use crate::pipeline::input::SelectedDocument;
use crate::summary::{Summary, SummaryEnvelope};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the summarization service.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    upload_url: String,
}

impl SummaryClient {
    /// Build a client for the configured service.
    pub fn new(config: &UploadConfig) -> Result<Self, DocSumError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.upload_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| DocSumError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            upload_url: config.upload_url(),
        })
    }

    /// URL the client uploads to.
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Upload a validated document and return the summary.
    ///
    /// # Errors
    /// * [`DocSumError::UploadFailed`] — the request never completed
    /// * [`DocSumError::ServerStatus`] — the service answered non-2xx
    /// * [`DocSumError::NoSummary`] — 2xx, but no usable summary in the body
    pub async fn upload(&self, document: SelectedDocument) -> Result<Summary, DocSumError> {
        info!(
            "Uploading {} ({} bytes) to {}",
            document.file_name(),
            document.size(),
            self.upload_url
        );

        let file_name = document.file_name().to_string();
        let mime = document.mime();
        let part = Part::bytes(document.into_bytes())
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| DocSumError::Internal(format!("invalid MIME type '{mime}': {e}")))?;
        let form = Form::new().part("document", part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Upload transport error: {e}");
                DocSumError::UploadFailed {
                    url: self.upload_url.clone(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // The service reports its own failures as ad-hoc JSON; log the
            // body for developers but surface only the status to the user.
            let body = response.text().await.unwrap_or_default();
            warn!("Service returned HTTP {status}: {body}");
            return Err(DocSumError::ServerStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read response body: {e}");
            DocSumError::UploadFailed {
                url: self.upload_url.clone(),
                reason: e.to_string(),
            }
        })?;

        match SummaryEnvelope::decode(&body) {
            Some(summary) => {
                debug!(
                    "Received summary: short={}B medium={}B long={}B",
                    summary.short.len(),
                    summary.medium.len(),
                    summary.long.len()
                );
                Ok(summary)
            }
            None => {
                warn!("Response had no usable summary object ({} bytes)", body.len());
                Err(DocSumError::NoSummary)
            }
        }
    }
}
