//! Summary result types and response-envelope decoding.
//!
//! The service returns `{"summary": {"short": ..., "medium": ..., "long": ...}}`
//! on success. Any other body shape is treated as "no summary" rather than a
//! decode error, because the service reports its own failures as ad-hoc JSON
//! (`{"error": ...}`) that this client deliberately does not consume.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three summary lengths the service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryVariant {
    /// Two-sentence summary. (default)
    #[default]
    Short,
    /// Roughly a paragraph.
    Medium,
    /// Multi-paragraph summary.
    Long,
}

impl SummaryVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryVariant::Short => "short",
            SummaryVariant::Medium => "medium",
            SummaryVariant::Long => "long",
        }
    }
}

impl fmt::Display for SummaryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(SummaryVariant::Short),
            "medium" => Ok(SummaryVariant::Medium),
            "long" => Ok(SummaryVariant::Long),
            other => Err(format!(
                "unknown summary variant '{other}' (expected short, medium, or long)"
            )),
        }
    }
}

/// A summary result: one string per variant.
///
/// Immutable after receipt; a new upload replaces it wholesale. Variants the
/// service omitted deserialize to empty strings, so looking one up behaves
/// like a map miss (empty display) rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub long: String,
}

impl Summary {
    /// The text for the given variant. Empty string when the service omitted it.
    pub fn variant(&self, v: SummaryVariant) -> &str {
        match v {
            SummaryVariant::Short => &self.short,
            SummaryVariant::Medium => &self.medium,
            SummaryVariant::Long => &self.long,
        }
    }

    /// True when every variant is empty — treated the same as a missing
    /// summary object by the upload path.
    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.medium.is_empty() && self.long.is_empty()
    }
}

/// Success-response envelope: `{"summary": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(default)]
    pub summary: Option<Summary>,
}

impl SummaryEnvelope {
    /// Decode a response body, mapping every non-conforming shape to `None`.
    pub fn decode(body: &[u8]) -> Option<Summary> {
        let envelope: SummaryEnvelope = serde_json::from_slice(body).ok()?;
        let summary = envelope.summary?;
        if summary.is_empty() {
            None
        } else {
            Some(summary)
        }
    }
}
