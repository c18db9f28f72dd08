//! Quote-aware scanning over content-line text.
//!
//! A double quote toggles "inside quotes"; separators are ignored while
//! inside. Quotes cannot be escaped, so every `"` toggles.

/// Returns the byte offset of the first `sep` not inside a quoted span.
#[must_use]
pub fn find_unquoted(s: &str, sep: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == sep && !in_quotes {
            return Some(i);
        }
    }
    None
}

/// Splits `s` on every `sep` not inside a quoted span.
///
/// Always yields at least one piece; quotes are left in place.
#[must_use]
pub fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == sep && !in_quotes {
            pieces.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    pieces.push(&s[start..]);

    pieces
}
