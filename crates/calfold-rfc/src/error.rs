use thiserror::Error;

use crate::rfc::ical::core::TreeError;
use crate::rfc::ical::parse::ParseError;

/// Errors surfaced by the calfold-rfc crate.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Core(#[from] calfold_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
