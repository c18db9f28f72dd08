//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::split::{find_unquoted, split_unquoted};
use super::values::dequote_param_value;
use crate::rfc::ical::core::{ContentLine, Parameter};

/// One unfolded content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Physical line (1-based) on which this logical line starts.
    pub line: usize,
    /// Line text with continuations joined.
    pub text: String,
}

/// Splits input into logical lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. A physical line starting with
/// SP or HTAB continues the previous logical line: the first character is
/// dropped and the rest appended with no separator. Logical lines that are
/// empty or all whitespace once assembled are discarded.
///
/// A continuation with nothing before it is kept whole as its own line, so
/// unfolding the output of [`fold_line`](crate::rfc::ical::build::fold_line)
/// always returns the original line.
#[must_use]
pub fn unfold_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        if let Some(continuation) = raw_line.strip_prefix([' ', '\t'])
            && let Some(prev) = lines.last_mut()
        {
            prev.text.push_str(continuation);
            continue;
        }

        lines.push(LogicalLine {
            line: i + 1,
            text: raw_line.to_string(),
        });
    }

    lines.retain(|l| !l.text.trim().is_empty());
    lines
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// The name and parameter names are uppercased. The value is returned raw;
/// unescaping happens when the line becomes a [`Property`](crate::rfc::ical::core::Property).
///
/// ## Errors
/// Returns `MissingColon` if no unquoted `:` exists and `MissingEquals` if a
/// parameter assignment lacks `=`.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_unquoted(line, ':').ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.chars().count() + 1,
        )
        .with_context(truncate_for_context(line))
    })?;

    let head = &line[..colon_pos];
    let raw_value = &line[colon_pos + 1..];

    let Some(semi_pos) = find_unquoted(head, ';') else {
        return Ok(ContentLine::new(head, raw_value));
    };

    let mut content_line = ContentLine::new(&head[..semi_pos], raw_value);

    // Byte offset of each assignment within the line, for error columns
    let mut offset = semi_pos + 1;
    for assignment in split_unquoted(&head[semi_pos + 1..], ';') {
        let column = line[..offset].chars().count() + 1;
        content_line.add_param(parse_parameter(assignment, line_num, column)?);
        offset += assignment.len() + 1;
    }

    Ok(content_line)
}

/// Parses one `NAME=VALUE[,VALUE...]` assignment.
///
/// Values are split on unquoted commas, then each piece loses one pair of
/// wrapping quotes, so `"Doe, Jane"` stays a single value.
fn parse_parameter(assignment: &str, line_num: usize, column: usize) -> ParseResult<Parameter> {
    let Some((name, value)) = assignment.split_once('=') else {
        return Err(
            ParseError::new(ParseErrorKind::MissingEquals, line_num, column)
                .with_context(format!("parameter {assignment:?}")),
        );
    };

    let values = split_unquoted(value, ',')
        .into_iter()
        .map(|v| dequote_param_value(v).to_string())
        .collect();

    Ok(Parameter::from_parsed(name, values))
}

/// Keeps error context readable for very long lines.
fn truncate_for_context(line: &str) -> String {
    const MAX_CHARS: usize = 40;

    if line.chars().count() <= MAX_CHARS {
        line.to_string()
    } else {
        let head: String = line.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    }
}
