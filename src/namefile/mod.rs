//! MODFLOW name files.
//!
//! This module contains:
//! - The name file parser that builds a [`UnitRegistry`](crate::core::UnitRegistry)
//! - Structural error types
//! - The comment-header attribute reader

pub mod errors;
pub mod header;
pub mod parser;

pub use errors::NameFileError;
pub use header::{extract_header_attributes, HeaderAttributes};
pub use parser::{find_unit_for_type, parse_name_file, ParseOptions};
