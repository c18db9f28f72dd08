//! Errors raised when building a tree by hand.

use thiserror::Error;

/// Rejected tree construction.
///
/// Every tree the public constructors accept serializes to text that parses
/// back to the same tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid property name {0:?}")]
    InvalidPropertyName(String),

    #[error("{0} is a component marker, not a property")]
    ReservedPropertyName(String),

    #[error("invalid parameter name {0:?}")]
    InvalidParameterName(String),

    #[error("parameter {0} needs at least one value")]
    EmptyParameter(String),

    #[error("parameter {name} value {value:?} contains a quote or control character")]
    InvalidParameterValue { name: String, value: String },
}

pub type TreeResult<T> = std::result::Result<T, TreeError>;

/// Letters, digits and `-` only (RFC 5545 `iana-token` / `x-name`).
pub(crate) fn is_name_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// DQUOTE and control characters other than HTAB cannot be written.
pub(crate) fn is_param_safe(s: &str) -> bool {
    !s.chars().any(|c| c == '"' || (c.is_control() && c != '\t'))
}
