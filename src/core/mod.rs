//! Core data structures.
//!
//! This module contains the foundational types shared by the parser and
//! its consumers:
//! - Package types and the registry that maps tokens to them
//! - Unit keys, unit entries, and the ordered unit registry

pub mod package_type;
pub mod unit;

pub use package_type::{PackageRegistry, PackageType, StandardPackage};
pub use unit::{OpenMode, UnitEntry, UnitKey, UnitRegistry, BINARY_DATA_FILETYPE};
