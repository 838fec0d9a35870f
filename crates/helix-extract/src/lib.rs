//! Reply extraction for webhook responses of unknown shape.
//!
//! Automation endpoints answer with anything from `{"reply": "..."}` to a
//! deeply nested workflow-engine payload or a bare string. [`extract`] turns
//! such a value into a short chat-ready summary plus an optional, sanitized
//! structured fragment for a "details" view. Extraction never fails and
//! never mutates its input.

pub mod blob;
pub mod key;
pub mod structured;
pub mod summary;

use serde::Serialize;
use serde_json::Value;

pub use blob::looks_like_automation_blob;
pub use structured::{discover_structured, sanitize};
pub use summary::{find_summary, summarize};

/// Outcome of [`extract`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// Reply text for the chat bubble; the fallback when none was found.
    pub summary: String,
    /// Sanitized details fragment. Never an empty container.
    pub structured: Option<Value>,
}

/// Extract the reply summary and structured details from `body`.
///
/// The two halves are independent: a structured fragment does not suppress
/// the fallback summary, and a summary does not suppress structured data.
pub fn extract(body: &Value, fallback: &str) -> ExtractionResult {
    let summary = summarize(body).unwrap_or(fallback).to_string();
    let structured = discover_structured(body)
        .map(sanitize)
        .filter(|value| !value.is_null());

    ExtractionResult {
        summary,
        structured,
    }
}
