//! iCalendar (RFC 5545) text to component tree and back.
//!
//! [`rfc::ical::parse`] turns folded iCalendar text into an [`ICalendar`]
//! tree; [`rfc::ical::build`] writes a tree back out. Both can be driven by
//! [`calfold_core::config::Settings`] through [`parse_with_settings`] and
//! [`serialize_with_settings`].

pub mod error;
pub mod rfc;

use calfold_core::config::Settings;

pub use error::{RfcError, RfcResult};
pub use rfc::ical::{
    Component, ComponentKind, ICalendar, Parameter, ParseError, Property, TreeError,
};

use rfc::ical::build::{SerializeOptions, serialize_with_options};
use rfc::ical::parse::{ParseOptions, parse_with_options};

/// Parses a document using the `[parser]` section of `settings`.
///
/// ## Errors
///
/// Returns `RfcError::Parse` if the input is not structurally valid iCalendar.
pub fn parse_with_settings(input: &str, settings: &Settings) -> RfcResult<ICalendar> {
    Ok(parse_with_options(input, ParseOptions::from(&settings.parser))?)
}

/// Serializes a document using the `[serializer]` section of `settings`.
#[must_use]
pub fn serialize_with_settings(ical: &ICalendar, settings: &Settings) -> String {
    serialize_with_options(ical, SerializeOptions::from(&settings.serializer))
}
