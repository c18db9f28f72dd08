//! iCalendar parsing error types.

use std::fmt;

/// Result type for iCalendar parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for iCalendar parsing.
///
/// Every parse error is fatal: no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Physical line where the offending logical line starts (1-based).
    pub line: usize,
    /// Column number where the error occurred (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input contains no content lines.
    EmptyInput,
    /// First content line is not `BEGIN:VCALENDAR`.
    MissingCalendarBegin,
    /// `BEGIN:` names a component outside the known set.
    UnknownComponent,
    /// `END:` does not match the innermost open component.
    MismatchedEnd,
    /// Input ended while a component was still open.
    UnexpectedEof,
    /// Content line has no unquoted colon.
    MissingColon,
    /// Parameter assignment has no `=`.
    MissingEquals,
    /// Components nest deeper than the configured limit.
    DepthExceeded,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty calendar data"),
            Self::MissingCalendarBegin => write!(f, "expected BEGIN:VCALENDAR"),
            Self::UnknownComponent => write!(f, "unknown component type"),
            Self::MismatchedEnd => write!(f, "mismatched END tag"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MissingColon => write!(f, "missing colon"),
            Self::MissingEquals => write!(f, "missing equals"),
            Self::DepthExceeded => write!(f, "maximum nesting depth exceeded"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
