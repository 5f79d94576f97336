//! gsflow - name file tooling for coupled GSFLOW/MODFLOW models
//!
//! This crate reads MODFLOW name files, resolves the package paths they
//! declare, and builds the unit registry that model loaders consume.

pub mod core;
pub mod namefile;
pub mod ops;
pub mod util;

/// Test fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{PackageRegistry, PackageType, UnitEntry, UnitKey, UnitRegistry};
pub use namefile::{parse_name_file, NameFileError, ParseOptions};
pub use util::PathAnchor;
