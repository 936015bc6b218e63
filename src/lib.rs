//! # docsum
//!
//! Client for a document summarization service: pick a PDF/JPEG/PNG, upload
//! it as multipart form data, and read back short/medium/long summary
//! variants.
//!
//! ## What lives where
//!
//! The service does all the heavy lifting (text extraction, OCR, the
//! summarization itself) and is treated as an opaque HTTP collaborator.
//! This crate owns the client-side contract:
//!
//! ```text
//! path
//!  │
//!  ├─ 1. Select   validate declared type (pdf/png/jpeg) and size (≤ 5 MiB)
//!  ├─ 2. Upload   multipart POST, single field `document`
//!  └─ 3. Display  pick a variant of {short, medium, long}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsum::{summarize, SummaryVariant, UploadConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UploadConfig::builder()
//!         .base_url("https://summaries.example.com")
//!         .build()?;
//!     let summary = summarize("report.pdf", &config).await?;
//!     println!("{}", summary.variant(SummaryVariant::Short));
//!     Ok(())
//! }
//! ```
//!
//! Interactive callers (anything that renders state between selection,
//! upload, and display) should drive a [`Session`] instead: it is the same
//! flow as a pure state machine, with the in-flight guard and
//! stale-response protection built in.
//!
//! ## Known limitation
//!
//! The type check trusts the file's declared type (its extension). A renamed
//! file passes it; content-signature validation is the service's job.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docsum` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod summarize;
pub mod summary;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{UploadConfig, UploadConfigBuilder, DEFAULT_BASE_URL, MAX_DOCUMENT_BYTES};
pub use error::DocSumError;
pub use pipeline::input::{select_document, SelectedDocument, ALLOWED_TYPES};
pub use pipeline::upload::SummaryClient;
pub use session::{Phase, Session, UploadTicket};
pub use summarize::{summarize, summarize_sync, summarize_to_file};
pub use summary::{Summary, SummaryVariant};
