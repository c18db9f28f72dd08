//! iCalendar text escaping utilities.

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Backslash is escaped first, then semicolon, comma, and newline.
/// Carriage returns are dropped.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escapes a parameter value if needed.
///
/// Returns the value wrapped in double quotes if it contains a separator
/// or whitespace; otherwise returns it unchanged. Values reaching the
/// serializer never hold `"` or line breaks, since [`Parameter`] rejects them.
///
/// [`Parameter`]: crate::rfc::ical::core::Parameter
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if needs_quoting(s) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}

/// Checks if a parameter value needs quoting.
fn needs_quoting(s: &str) -> bool {
    s.chars().any(|c| matches!(c, ':' | ';' | ',' | ' ' | '\t'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::parse::unescape_text;

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("hello, world"), "hello\\, world");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("semi;colon"), "semi\\;colon");
    }

    #[test]
    fn escape_text_drops_carriage_return() {
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn escape_text_backslash_before_others() {
        assert_eq!(escape_text("\\,"), "\\\\\\,");
        assert_eq!(escape_text("\\\n"), "\\\\\\n");
    }

    #[test]
    fn escape_then_unescape_is_identity() {
        for s in [
            "Meeting, Planning; Review",
            "Line 1\nLine 2",
            "C:\\Users\\calendar",
            "trailing\\",
            "日本語, テキスト",
            "",
        ] {
            assert_eq!(unescape_text(&escape_text(s)), s, "input {s:?}");
        }
    }

    #[test]
    fn escape_param_value_simple() {
        assert_eq!(escape_param_value("Simple"), "Simple");
        assert_eq!(escape_param_value("mailto:a@x.com"), "\"mailto:a@x.com\"");
        assert_eq!(escape_param_value(""), "");
    }

    #[test]
    fn escape_param_value_quoted() {
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_param_value("Has;semi"), "\"Has;semi\"");
        assert_eq!(escape_param_value("John Doe"), "\"John Doe\"");
        assert_eq!(escape_param_value("tab\there"), "\"tab\there\"");
    }
}
