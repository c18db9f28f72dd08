//! Value-level decoding applied after tokenization.

/// Unescapes a property value (RFC 5545 §3.3.11).
///
/// Applied as independent substring replacements in this order:
/// `\n`/`\N` to newline, `\;`, `\,`, then `\\`. Because `\n` is replaced
/// before `\\`, the input `\\n` decodes to a backslash followed by a newline.
/// Existing payloads depend on this order.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    s.replace("\\n", "\n")
        .replace("\\N", "\n")
        .replace("\\;", ";")
        .replace("\\,", ",")
        .replace("\\\\", "\\")
}

/// Strips one pair of double quotes wrapping the whole parameter value.
#[must_use]
pub fn dequote_param_value(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
