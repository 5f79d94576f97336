//! Unit registry built from a name file.
//!
//! Every package line of a name file becomes a [`UnitEntry`] keyed by its
//! unit number. Entries keep the order in which they were declared.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::core::package_type::PackageType;

/// File type token that selects binary mode.
pub const BINARY_DATA_FILETYPE: &str = "DATA(BINARY)";

/// Key of a unit registry entry.
///
/// Most entries are keyed by their unit number. A line declaring unit `0`
/// for a package type with no reserved unit is keyed by its file type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitKey {
    Unit(i64),
    FileType(String),
}

impl UnitKey {
    /// The unit number, if this key is numeric.
    pub fn as_unit(&self) -> Option<i64> {
        match self {
            UnitKey::Unit(n) => Some(*n),
            UnitKey::FileType(_) => None,
        }
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKey::Unit(n) => write!(f, "{}", n),
            UnitKey::FileType(ft) => write!(f, "{}", ft),
        }
    }
}

impl Serialize for UnitKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UnitKey::Unit(n) => serializer.serialize_i64(*n),
            UnitKey::FileType(ft) => serializer.serialize_str(ft),
        }
    }
}

impl From<i64> for UnitKey {
    fn from(n: i64) -> Self {
        UnitKey::Unit(n)
    }
}

impl From<&str> for UnitKey {
    fn from(s: &str) -> Self {
        UnitKey::FileType(s.to_string())
    }
}

/// How a package file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMode {
    Text,
    Binary,
}

impl OpenMode {
    /// Binary for `DATA(BINARY)`, text for everything else.
    pub fn for_filetype(filetype: &str) -> Self {
        if filetype == BINARY_DATA_FILETYPE {
            OpenMode::Binary
        } else {
            OpenMode::Text
        }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Text => write!(f, "text"),
            OpenMode::Binary => write!(f, "binary"),
        }
    }
}

/// One package file declared in a name file.
#[derive(Debug)]
pub struct UnitEntry {
    filetype: String,
    path: PathBuf,
    mode: OpenMode,
    handle: Option<File>,
    open_error: Option<String>,
    package: Option<Arc<dyn PackageType>>,
}

impl UnitEntry {
    /// Create an entry. `filetype` is stored upper-cased.
    pub fn new(
        filetype: impl AsRef<str>,
        path: impl Into<PathBuf>,
        mode: OpenMode,
        handle: Option<File>,
    ) -> Self {
        UnitEntry {
            filetype: filetype.as_ref().to_uppercase(),
            path: path.into(),
            mode,
            handle,
            open_error: None,
            package: None,
        }
    }

    /// Record why the file could not be opened.
    pub fn with_open_error(mut self, error: impl Into<String>) -> Self {
        self.open_error = Some(error.into());
        self
    }

    /// Attach the package type this entry was resolved to.
    pub fn with_package(mut self, package: Option<Arc<dyn PackageType>>) -> Self {
        self.package = package;
        self
    }

    /// Upper-cased file type token.
    pub fn filetype(&self) -> &str {
        &self.filetype
    }

    /// Resolved path of the package file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mode the file was opened in.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Open handle, if the file could be opened.
    pub fn handle(&self) -> Option<&File> {
        self.handle.as_ref()
    }

    /// Take ownership of the open handle.
    pub fn take_handle(&mut self) -> Option<File> {
        self.handle.take()
    }

    /// Check if a handle is held.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Why opening failed, if it did.
    pub fn open_error(&self) -> Option<&str> {
        self.open_error.as_deref()
    }

    /// Registered package type for this file type, if known.
    pub fn package(&self) -> Option<&Arc<dyn PackageType>> {
        self.package.as_ref()
    }
}

/// Insertion-ordered mapping from unit key to entry.
#[derive(Debug, Default)]
pub struct UnitRegistry {
    entries: IndexMap<UnitKey, UnitEntry>,
}

impl UnitRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        UnitRegistry {
            entries: IndexMap::new(),
        }
    }

    /// Insert an entry, returning the one it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: UnitKey, entry: UnitEntry) -> Option<UnitEntry> {
        self.entries.insert(key, entry)
    }

    /// Get an entry by key.
    pub fn get(&self, key: &UnitKey) -> Option<&UnitEntry> {
        self.entries.get(key)
    }

    /// Get an entry by unit number.
    pub fn get_unit(&self, unit: i64) -> Option<&UnitEntry> {
        self.entries.get(&UnitKey::Unit(unit))
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&UnitKey, &UnitEntry)> + '_ {
        self.entries.iter()
    }

    /// Iterate keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &UnitKey> + '_ {
        self.entries.keys()
    }

    /// Key of the first entry whose file type matches, ignoring case.
    pub fn find_unit_for_type(&self, filetype: &str) -> Option<&UnitKey> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.filetype().eq_ignore_ascii_case(filetype))
            .map(|(key, _)| key)
    }

    /// Entries whose file could not be opened.
    pub fn missing_files(&self) -> impl Iterator<Item = (&UnitKey, &UnitEntry)> + '_ {
        self.entries.iter().filter(|(_, entry)| !entry.is_open())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for UnitRegistry {
    type Item = (UnitKey, UnitEntry);
    type IntoIter = indexmap::map::IntoIter<UnitKey, UnitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a UnitRegistry {
    type Item = (&'a UnitKey, &'a UnitEntry);
    type IntoIter = indexmap::map::Iter<'a, UnitKey, UnitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
