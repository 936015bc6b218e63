//! The per-page upload session, modelled as an explicit state machine.
//!
//! The original UI kept its file/summary/loading/error state in ad-hoc
//! mutable fields; here the whole thing is one struct with pure transitions
//! and no I/O, so every rule is testable without a renderer or a server:
//!
//! ```text
//! Idle ──select──▶ Ready ──begin_upload──▶ Uploading
//!                    ▲                         │
//!                    └──────(error)────────────┤
//!                                              ▼
//!                         Displaying ◀──(summary received)
//!                              │  ▲
//!                              └──┘ set_variant (no phase change)
//! ```
//!
//! Rules the transitions enforce:
//! * An upload cannot start while one is in flight ([`Session::begin_upload`]
//!   returns [`DocSumError::UploadInFlight`]).
//! * Selecting a new document does not clear a displayed summary; only
//!   starting an upload does.
//! * The uploading flag is cleared by *every* [`Session::finish_upload`],
//!   success or failure — there is no stuck-loading state.
//! * A result delivered for a stale ticket (the session was reset while the
//!   request was in flight) is dropped rather than applied.

use crate::error::DocSumError;
use crate::pipeline::input::SelectedDocument;
use crate::summary::{Summary, SummaryVariant};

/// Where the session is in its lifecycle. Purely derived state, exposed for
/// rendering decisions (which controls to enable, whether to show a summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet, or the last selection was rejected.
    Idle,
    /// A validated document is ready to upload.
    Ready,
    /// An upload is in flight.
    Uploading,
    /// A summary is on display.
    Displaying,
}

/// Proof that an upload was started; pairs a network result with the
/// session generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

/// State for one upload-and-display session.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<SelectedDocument>,
    summary: Option<Summary>,
    variant: SummaryVariant,
    uploading: bool,
    error: Option<String>,
    generation: u64,
}

impl Session {
    /// A fresh idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a selection attempt (see
    /// [`crate::pipeline::input::select_document`]).
    ///
    /// A rejected selection sets the error and leaves any previously
    /// accepted document in place; an accepted one stores the document and
    /// clears the error. Neither touches a displayed summary.
    pub fn select(&mut self, outcome: Result<SelectedDocument, DocSumError>) {
        match outcome {
            Ok(doc) => {
                self.document = Some(doc);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Start an upload: clears the error and any previous summary, resets
    /// the variant to `short`, and hands back the document plus a ticket for
    /// [`Session::finish_upload`].
    ///
    /// # Errors
    /// * [`DocSumError::UploadInFlight`] when an upload is already running
    /// * [`DocSumError::NoDocumentSelected`] when there is nothing to send
    ///   (also recorded as the session error)
    pub fn begin_upload(&mut self) -> Result<(SelectedDocument, UploadTicket), DocSumError> {
        if self.uploading {
            return Err(DocSumError::UploadInFlight);
        }
        let Some(document) = self.document.clone() else {
            let err = DocSumError::NoDocumentSelected;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.uploading = true;
        self.error = None;
        self.summary = None;
        self.variant = SummaryVariant::Short;
        self.generation += 1;

        Ok((
            document,
            UploadTicket {
                generation: self.generation,
            },
        ))
    }

    /// Apply an upload result.
    ///
    /// Stale tickets (issued before a [`Session::reset`]) are dropped
    /// without touching state. For a current ticket the uploading flag is
    /// always cleared; success stores the summary with the `short` variant
    /// displayed, failure records the user-visible message.
    pub fn finish_upload(&mut self, ticket: UploadTicket, outcome: Result<Summary, DocSumError>) {
        if ticket.generation != self.generation {
            return;
        }
        self.uploading = false;
        match outcome {
            Ok(summary) => {
                self.summary = Some(summary);
                self.variant = SummaryVariant::Short;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Switch the displayed variant. No-op while no summary is on display.
    pub fn set_variant(&mut self, variant: SummaryVariant) {
        if self.summary.is_some() {
            self.variant = variant;
        }
    }

    /// Discard all state and invalidate any in-flight ticket.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.uploading {
            Phase::Uploading
        } else if self.summary.is_some() {
            Phase::Displaying
        } else if self.document.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// The selected document, if any.
    pub fn document(&self) -> Option<&SelectedDocument> {
        self.document.as_ref()
    }

    /// The received summary, if any.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// The currently selected variant.
    pub fn variant(&self) -> SummaryVariant {
        self.variant
    }

    /// The text to display: the selected variant of the current summary.
    pub fn displayed_text(&self) -> Option<&str> {
        self.summary.as_ref().map(|s| s.variant(self.variant))
    }

    /// The user-visible error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an upload is in flight.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Whether the upload trigger should be enabled.
    pub fn can_upload(&self) -> bool {
        !self.uploading && self.document.is_some()
    }
}
