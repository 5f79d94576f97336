//! High-level operations.
//!
//! This module contains the implementation of gsflow commands.

pub mod units;

pub use units::{
    find_units, format_units, list_packages, load_header, load_model_config, load_units,
    package_registry, summarize, LoadOptions, PackageSummary, UnitSummary,
};
