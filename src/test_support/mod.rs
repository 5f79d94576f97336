//! Test utilities for unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::NameFileFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fx = NameFileFixture::new()
//!         .file("model.dis", "")
//!         .name_file("model.nam", "DIS 11 model.dis\n");
//!
//!     let registry = fx.parse(&PackageRegistry::new(), &ParseOptions::default()).unwrap();
//!     assert_eq!(registry.len(), 1);
//! }
//! ```

pub mod fixtures;

pub use fixtures::*;
