//! iCalendar parsing primitives (RFC 5545).
//!
//! This module provides parsers for iCalendar content:
//! - Split: Quote-aware separator scanning
//! - Lexer: Content line tokenization with unfolding
//! - Values: Text unescaping and parameter dequoting
//! - Parser: Full document parsing into the component tree

mod error;
mod lexer;
mod parser;
mod split;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{LogicalLine, parse_content_line, unfold_lines};
pub use parser::{ParseOptions, parse, parse_with_options};
pub use split::{find_unquoted, split_unquoted};
pub use values::{dequote_param_value, unescape_text};
