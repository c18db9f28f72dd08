//! iCalendar serialization (RFC 5545).
//!
//! This module provides serializers for iCalendar content:
//! - Escape: Text and parameter value escaping
//! - Fold: Content line folding at 75 characters
//! - Serializer: Full document serialization in recorded order

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::{fold_line, fold_line_with};
pub use serializer::{
    SerializeOptions, serialize, serialize_component, serialize_property, serialize_with_options,
};
