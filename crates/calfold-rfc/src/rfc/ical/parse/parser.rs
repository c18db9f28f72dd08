//! iCalendar document parser (RFC 5545).
//!
//! Builds the component tree from unfolded content lines. Nesting is tracked
//! with an explicit stack, so hostile input hits `DepthExceeded` instead of
//! exhausting the call stack.

use std::str::FromStr;

use calfold_core::config::ParserConfig;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{LogicalLine, parse_content_line, unfold_lines};
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Property, names};

/// Options controlling [`parse_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of simultaneously open components, root included.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }
}

/// Parses an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is not structurally valid iCalendar.
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses an iCalendar document with explicit options.
///
/// Only the first VCALENDAR is consumed; lines after its `END` are ignored.
///
/// ## Errors
///
/// Returns an error if the input is not structurally valid iCalendar or
/// nests deeper than `options.max_depth`.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_with_options(input: &str, options: ParseOptions) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = unfold_lines(input);
    tracing::trace!(count = lines.len(), "Unfolded lines");

    let root = build_tree(lines, options.max_depth)
        .inspect_err(|e| tracing::warn!(error = %e, "iCalendar parse failed"))?;

    tracing::debug!(
        properties = root.properties().count(),
        children = root.children().len(),
        "iCalendar document parsed successfully"
    );

    Ok(ICalendar::from_root(root))
}

/// An open component and the line its `BEGIN` appeared on.
struct Frame {
    component: Component,
    begin_line: usize,
}

impl Frame {
    fn new(kind: ComponentKind, begin_line: usize) -> Self {
        Self {
            component: Component::new(kind),
            begin_line,
        }
    }
}

/// The root marker is matched like any other `BEGIN`: name and value
/// compare case-insensitively and the value is trimmed.
fn opens_calendar(first: &LogicalLine) -> bool {
    parse_content_line(&first.text, first.line).is_ok_and(|cl| {
        cl.name == names::BEGIN
            && cl
                .raw_value
                .trim()
                .eq_ignore_ascii_case(ComponentKind::Calendar.as_str())
    })
}

/// Consumes logical lines until the root VCALENDAR closes.
fn build_tree(lines: Vec<LogicalLine>, max_depth: usize) -> ParseResult<Component> {
    let mut lines = lines.into_iter();

    let first = lines
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::EmptyInput, 1, 1))?;

    if !opens_calendar(&first) {
        return Err(
            ParseError::new(ParseErrorKind::MissingCalendarBegin, first.line, 1)
                .with_context(format!("found {:?}", first.text)),
        );
    }

    if max_depth == 0 {
        return Err(ParseError::new(ParseErrorKind::DepthExceeded, first.line, 1)
            .with_context("BEGIN:VCALENDAR exceeds limit of 0"));
    }

    let mut current = Frame::new(ComponentKind::Calendar, first.line);
    let mut parents: Vec<Frame> = Vec::new();

    for LogicalLine { line, text } in lines {
        let content_line = parse_content_line(&text, line)?;

        match content_line.name.as_str() {
            names::BEGIN => {
                let name = content_line.raw_value.trim();
                let kind = ComponentKind::parse(name).ok_or_else(|| {
                    ParseError::new(ParseErrorKind::UnknownComponent, line, 1)
                        .with_context(format!("BEGIN:{name}"))
                })?;

                // Open frames after this push: parents + current + new child
                if parents.len() + 2 > max_depth {
                    return Err(ParseError::new(ParseErrorKind::DepthExceeded, line, 1)
                        .with_context(format!("BEGIN:{kind} exceeds limit of {max_depth}")));
                }

                tracing::trace!(%kind, line, depth = parents.len() + 2, "Open component");
                parents.push(std::mem::replace(&mut current, Frame::new(kind, line)));
            }
            names::END => {
                let name = content_line.raw_value.trim().to_ascii_uppercase();
                let expected = current.component.kind();
                if name != expected.as_str() {
                    return Err(ParseError::new(ParseErrorKind::MismatchedEnd, line, 1)
                        .with_context(format!("expected END:{expected}, found END:{name}")));
                }

                let Some(parent) = parents.pop() else {
                    return Ok(current.component);
                };
                let finished = std::mem::replace(&mut current, parent);
                current.component.add_child(finished.component);
            }
            _ => current.component.add_property(Property::from_parsed(content_line)),
        }
    }

    Err(
        ParseError::new(ParseErrorKind::UnexpectedEof, current.begin_line, 1).with_context(
            format!("while parsing {}", current.component.kind()),
        ),
    )
}

impl FromStr for ICalendar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
