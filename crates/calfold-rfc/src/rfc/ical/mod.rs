//! iCalendar RFC 5545 text format.
//!
//! This module provides parsing and serialization of the generic
//! component/property tree:
//!
//! - `core`: Type definitions for iCalendar structures
//! - `parse`: Parsers for iCalendar content
//! - `build`: Serializers for iCalendar content
//!
//! ## Example
//!
//! ```rust
//! use calfold_rfc::rfc::ical::{build, core::*, parse};
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::new("UID", "my-event-1").unwrap());
//! event.add_property(Property::new("SUMMARY", "Team Meeting").unwrap());
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical);
//! let parsed = parse::parse(&output).unwrap();
//! assert_eq!(parsed, ical);
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::serialize;
pub use self::core::{Component, ComponentKind, ICalendar, Parameter, Property, TreeError};
pub use parse::{ParseError, ParseResult, parse};
