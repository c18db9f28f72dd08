//! iCalendar serializer (RFC 5545).
//!
//! Serializes the component tree back to text, mirroring the parser step for
//! step. Properties, parameters, and children are written in recorded order.

use std::fmt;

use calfold_core::config::{LineEnding, SerializerConfig};

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line_with;
use crate::rfc::ical::core::{Component, ICalendar, Parameter, Property, names};

/// Options controlling [`serialize_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Terminator written after every physical line.
    pub line_ending: LineEnding,
}

impl From<&SerializerConfig> for SerializeOptions {
    fn from(config: &SerializerConfig) -> Self {
        Self {
            line_ending: config.line_ending,
        }
    }
}

/// Serializes an iCalendar document to a string with CRLF line endings.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_with_options(ical, SerializeOptions::default())
}

/// Serializes an iCalendar document with explicit options.
#[must_use]
#[tracing::instrument(skip(ical), fields(children = ical.root().children().len()))]
pub fn serialize_with_options(ical: &ICalendar, options: SerializeOptions) -> String {
    let mut output = String::new();
    write_component(&mut output, ical.root(), options.line_ending);

    tracing::trace!(output_len = output.len(), "iCalendar document serialized");
    output
}

/// Serializes a component and its descendants to a string.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut output = String::new();
    write_component(&mut output, component, LineEnding::Crlf);
    output
}

/// Serializes a property to folded, CRLF-terminated text.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    fold_line_with(&format_property(prop), LineEnding::Crlf)
}

fn write_component(output: &mut String, component: &Component, ending: LineEnding) {
    let kind = component.kind();

    output.push_str(&fold_line_with(&format!("{}:{kind}", names::BEGIN), ending));

    for prop in component.properties() {
        output.push_str(&fold_line_with(&format_property(prop), ending));
    }

    for child in component.children() {
        write_component(output, child, ending);
    }

    output.push_str(&fold_line_with(&format!("{}:{kind}", names::END), ending));
}

/// Builds the unfolded `NAME[;PARAM=VALUE]*:VALUE` line for a property.
fn format_property(prop: &Property) -> String {
    let mut line = prop.name().to_string();

    for param in prop.params() {
        push_parameter(&mut line, param);
    }

    line.push(':');
    line.push_str(&escape_text(prop.value()));
    line
}

/// Appends one `;NAME=VALUE` assignment per value.
///
/// Multiple values are never comma-joined; the parser folds repeated
/// assignments back into the same sequence.
fn push_parameter(line: &mut String, param: &Parameter) {
    for value in param.values() {
        line.push(';');
        line.push_str(param.name());
        line.push('=');
        line.push_str(&escape_param_value(value));
    }
}

impl fmt::Display for ICalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
