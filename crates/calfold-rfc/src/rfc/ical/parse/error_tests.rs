//! Tests for iCalendar parse errors.

use super::*;

#[test]
fn test_parse_error_new() {
    let error = ParseError::new(ParseErrorKind::UnexpectedEof, 10, 5);
    assert_eq!(error.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(error.line, 10);
    assert_eq!(error.column, 5);
    assert!(error.context.is_none());
}

#[test]
fn test_parse_error_with_context() {
    let error = ParseError::new(ParseErrorKind::UnknownComponent, 3, 1)
        .with_context("BEGIN:VCARD");

    assert_eq!(error.kind, ParseErrorKind::UnknownComponent);
    assert_eq!(error.line, 3);
    assert_eq!(error.column, 1);
    assert_eq!(error.context.as_deref(), Some("BEGIN:VCARD"));
}

#[test]
fn test_parse_error_display() {
    let error = ParseError::new(ParseErrorKind::MissingColon, 1, 10);
    let display = format!("{error}");
    assert_eq!(display, "missing colon at line 1, column 10");
}

#[test]
fn test_parse_error_display_with_context() {
    let error = ParseError::new(ParseErrorKind::MismatchedEnd, 5, 1)
        .with_context("expected END:VEVENT, found END:VTODO");
    let display = format!("{error}");
    assert!(display.contains("mismatched END tag"));
    assert!(display.contains("line 5"));
    assert!(display.ends_with(": expected END:VEVENT, found END:VTODO"));
}

#[test]
fn test_all_error_kinds_display() {
    let kinds = [
        (ParseErrorKind::EmptyInput, "empty calendar data"),
        (
            ParseErrorKind::MissingCalendarBegin,
            "expected BEGIN:VCALENDAR",
        ),
        (ParseErrorKind::UnknownComponent, "unknown component type"),
        (ParseErrorKind::MismatchedEnd, "mismatched END tag"),
        (ParseErrorKind::UnexpectedEof, "unexpected end of input"),
        (ParseErrorKind::MissingColon, "missing colon"),
        (ParseErrorKind::MissingEquals, "missing equals"),
        (
            ParseErrorKind::DepthExceeded,
            "maximum nesting depth exceeded",
        ),
    ];

    for (kind, expected) in kinds {
        let display = format!("{kind}");
        assert_eq!(display, expected, "Mismatch for {kind:?}");
    }
}

#[test]
fn test_parse_error_is_error_trait() {
    let error = ParseError::new(ParseErrorKind::MissingEquals, 2, 3);
    let _: &dyn std::error::Error = &error;
}

#[test]
fn test_parse_error_clone() {
    let original =
        ParseError::new(ParseErrorKind::DepthExceeded, 7, 1).with_context("limit is 4");
    let cloned = original.clone();
    assert_eq!(cloned, original);
}
