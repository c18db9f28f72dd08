//! Content line folding for iCalendar (RFC 5545 §3.1).

use calfold_core::config::LineEnding;

/// Maximum characters on the first physical line, excluding the terminator.
const MAX_LINE_CHARS: usize = 75;

/// Folds a content line and terminates every physical line with CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    fold_line_with(line, LineEnding::Crlf)
}

/// Folds a content line to the 75-character limit.
///
/// The first physical line holds up to 75 characters; each continuation is
/// a single space followed by up to 74 more. Lengths count `char`s, so a
/// fold never splits a multi-byte sequence, though a line of non-ASCII text
/// may exceed 75 octets.
#[must_use]
pub fn fold_line_with(line: &str, ending: LineEnding) -> String {
    let terminator = ending.as_str();
    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_CHARS + 1) * 3);

    let mut rest = line;
    let mut limit = MAX_LINE_CHARS;
    loop {
        let split = rest.char_indices().nth(limit).map_or(rest.len(), |(i, _)| i);
        result.push_str(&rest[..split]);
        result.push_str(terminator);

        rest = &rest[split..];
        if rest.is_empty() {
            break;
        }

        // Continuation lines give one character to the leading space
        result.push(' ');
        limit = MAX_LINE_CHARS - 1;
    }

    result
}
