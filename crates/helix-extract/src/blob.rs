//! Detection of strings that are automation internals rather than prose.

/// Anything longer than this is never shown in a chat bubble.
pub const MAX_REPLY_CHARS: usize = 4000;

/// Whitespace-free strings longer than this are treated as tokens or dumps.
pub const MAX_UNBROKEN_CHARS: usize = 600;

/// True when `text` looks like raw workflow data (embedded JSON, a token,
/// a giant dump) instead of a human-facing reply.
///
/// Lengths are counted in characters, not bytes. Whitespace is Unicode
/// whitespace, so a no-break space also breaks up an unbroken run.
pub fn looks_like_automation_blob(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let last = chars.next_back().unwrap_or(first);
    let length = text.chars().count();

    if length > MAX_REPLY_CHARS {
        return true;
    }

    if matches!((first, last), ('{', '}') | ('[', ']')) {
        return true;
    }

    length > MAX_UNBROKEN_CHARS && !text.chars().any(char::is_whitespace)
}
