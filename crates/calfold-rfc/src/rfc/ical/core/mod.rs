//! iCalendar core models (RFC 5545).
//!
//! This module defines the tree produced by the parser and consumed by the
//! serializer. Values are kept as opaque strings:
//! - Round-trip fidelity: unknown properties and parameters are preserved
//! - Order preservation: repeated properties and parameter values keep source order
//! - Read-only queries for downstream checkers (kind, properties, parameters, children)

mod component;
mod error;
mod parameter;
mod property;

pub use component::{Component, ComponentKind, ICalendar, UnknownComponentKind};
pub use error::{TreeError, TreeResult};
pub use parameter::Parameter;
pub use property::{ContentLine, Property, names};
