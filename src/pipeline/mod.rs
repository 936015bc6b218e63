//! Pipeline stages for the upload-and-summarize flow.
//!
//! Each submodule implements exactly one step. Keeping them separate makes
//! each independently testable: validation runs against plain files with no
//! server, and the upload client runs against a mock server with no files.
//!
//! ## Data Flow
//!
//! ```text
//! input ──────────▶ upload ──────────▶ Summary
//! (path, validate)  (multipart POST)   (short/medium/long)
//! ```
//!
//! 1. [`input`]  — resolve the path and validate declared type and size
//! 2. [`upload`] — POST the document as multipart form data; the only stage
//!    with network I/O

pub mod input;
pub mod upload;
