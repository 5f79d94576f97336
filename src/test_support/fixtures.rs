//! Model directory fixtures.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::{PackageRegistry, UnitRegistry};
use crate::namefile::{parse_name_file, NameFileError, ParseOptions};

/// A temporary model workspace holding a name file and its package files.
#[derive(Debug)]
pub struct NameFileFixture {
    dir: TempDir,
    name_file: Option<PathBuf>,
}

impl NameFileFixture {
    /// Create an empty workspace.
    pub fn new() -> Self {
        NameFileFixture {
            dir: TempDir::new().expect("failed to create temp dir"),
            name_file: None,
        }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a package file relative to the workspace root.
    pub fn file(self, rel_path: &str, content: &str) -> Self {
        let full_path = self.dir.path().join(rel_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        std::fs::write(&full_path, content).expect("failed to write fixture file");
        self
    }

    /// Write the name file; later calls replace which file [`parse`](Self::parse) reads.
    pub fn name_file(mut self, rel_path: &str, content: &str) -> Self {
        self = self.file(rel_path, content);
        self.name_file = Some(self.dir.path().join(rel_path));
        self
    }

    /// Path of the name file.
    pub fn name_file_path(&self) -> &Path {
        self.name_file.as_deref().expect("fixture has no name file")
    }

    /// Parse the name file with package paths anchored at the workspace root.
    pub fn parse(
        &self,
        packages: &PackageRegistry,
        options: &ParseOptions,
    ) -> Result<UnitRegistry, NameFileError> {
        let options = options.clone().with_workspace(self.root());
        parse_name_file(self.name_file_path(), packages, &options)
    }
}

impl Default for NameFileFixture {
    fn default() -> Self {
        Self::new()
    }
}
