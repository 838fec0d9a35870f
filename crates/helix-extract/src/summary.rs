//! Recursive search for the reply text inside a webhook response.
//!
//! The walk is depth-first and pre-order; the first acceptable string wins.
//! Object members are visited in document order, which relies on
//! serde_json's `preserve_order` feature.

use serde_json::Value;

use crate::blob::looks_like_automation_blob;
use crate::key::{is_excluded, is_likely_reply, normalize_key};

/// Find the most likely human-readable reply inside `value`.
///
/// `key` is the member name `value` was found under (`None` at the top
/// level or for a bare value). `allow_bare` accepts strings regardless of
/// their key; it is inherited by everything below a reply-like key.
///
/// Returns a trimmed slice of the input, or `None` when nothing qualifies.
pub fn find_summary<'a>(value: &'a Value, key: Option<&str>, allow_bare: bool) -> Option<&'a str> {
    match value {
        Value::String(text) => accept_string(text, key, allow_bare),
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_summary(item, key, allow_bare)),
        Value::Object(members) => members.iter().find_map(|(child_key, child)| {
            let normalized = normalize_key(child_key);
            if is_excluded(&normalized) {
                return None;
            }
            let child_allow_bare = is_likely_reply(&normalized);
            find_summary(child, Some(child_key.as_str()), child_allow_bare || allow_bare)
        }),
        Value::Number(_) | Value::Bool(_) | Value::Null => None,
    }
}

/// Convenience for the top-level call: bare strings are accepted.
pub fn summarize(value: &Value) -> Option<&str> {
    find_summary(value, None, true)
}

fn accept_string<'a>(text: &'a str, key: Option<&str>, allow_bare: bool) -> Option<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() || looks_like_automation_blob(trimmed) {
        return None;
    }

    let accepted = match key {
        None => allow_bare,
        Some(key) => allow_bare || is_likely_reply(&normalize_key(key)),
    };
    accepted.then_some(trimmed)
}
