//! Key normalization and classification.
//!
//! Webhook payloads spell the same field many ways (`replyMessage`,
//! `reply_message`, `Reply Message`). Keys are compared after lowercasing
//! and removing every whitespace, `_` and `-` character.

/// Normalized keys that name a reply field outright.
const REPLY_KEYS: &[&str] = &[
    "reply",
    "message",
    "messagetext",
    "statustext",
    "status",
    "response",
    "result",
    "detail",
    "details",
    "description",
];

/// Fragments that mark a key as reply-bearing wherever they occur.
const REPLY_FRAGMENTS: &[&str] = &["message", "reply", "response"];

/// Normalized keys whose subtrees hold raw automation output.
const EXCLUDED_KEYS: &[&str] = &["output", "outputs"];

/// Lowercase `key` and strip whitespace, underscores and hyphens.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !(c.is_whitespace() || *c == '_' || *c == '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// True when an already-normalized key probably holds the reply text.
pub fn is_likely_reply(normalized: &str) -> bool {
    if normalized.is_empty() {
        return false;
    }
    REPLY_KEYS.contains(&normalized)
        || REPLY_FRAGMENTS
            .iter()
            .any(|fragment| normalized.contains(fragment))
}

/// True when an already-normalized key must be hidden from extraction.
pub fn is_excluded(normalized: &str) -> bool {
    EXCLUDED_KEYS.contains(&normalized)
}
