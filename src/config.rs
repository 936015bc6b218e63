//! Configuration for talking to the summarization service.
//!
//! Everything the upload path needs lives in [`UploadConfig`], built via its
//! [`UploadConfigBuilder`]. Keeping the knobs in one struct makes it trivial
//! to share a config between a [`crate::session::Session`] driver and tests,
//! and to point the whole client at a mock server by swapping `base_url`.

use crate::error::DocSumError;
use serde::{Deserialize, Serialize};

/// Default service base URL: the local development host.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Maximum accepted document size: 5 MiB.
///
/// The check is strict `>` — a document of exactly 5 MiB is accepted.
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Configuration for an upload to the summarization service.
///
/// # Example
/// ```rust
/// use docsum::UploadConfig;
///
/// let config = UploadConfig::builder()
///     .base_url("https://summaries.example.com")
///     .upload_timeout_secs(30)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Base URL of the summarization service. Default: [`DEFAULT_BASE_URL`].
    ///
    /// The upload endpoint is always `{base_url}/upload`; only the host part
    /// varies between deployments, so that is the configurable piece.
    pub base_url: String,

    /// Size cap in bytes applied at selection time. Default: [`MAX_DOCUMENT_BYTES`].
    pub max_document_bytes: u64,

    /// Per-upload timeout in seconds. Default: `None` (no timeout).
    ///
    /// The service can take a while on large scans, and the original client
    /// imposed no deadline, so none is the default. Set one when a hung
    /// connection is worse than a long wait.
    pub upload_timeout_secs: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_document_bytes: MAX_DOCUMENT_BYTES,
            upload_timeout_secs: None,
        }
    }
}

impl UploadConfig {
    /// Create a new builder for `UploadConfig`.
    pub fn builder() -> UploadConfigBuilder {
        UploadConfigBuilder {
            config: Self::default(),
        }
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url.trim_end_matches('/'))
    }
}

/// Builder for [`UploadConfig`].
#[derive(Debug)]
pub struct UploadConfigBuilder {
    config: UploadConfig,
}

impl UploadConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn max_document_bytes(mut self, bytes: u64) -> Self {
        self.config.max_document_bytes = bytes;
        self
    }

    pub fn upload_timeout_secs(mut self, secs: u64) -> Self {
        self.config.upload_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<UploadConfig, DocSumError> {
        let c = &self.config;
        if !c.base_url.starts_with("http://") && !c.base_url.starts_with("https://") {
            return Err(DocSumError::InvalidConfig(format!(
                "base_url must be an http:// or https:// URL, got '{}'",
                c.base_url
            )));
        }
        if c.max_document_bytes == 0 {
            return Err(DocSumError::InvalidConfig(
                "max_document_bytes must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
