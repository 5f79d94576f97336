//! Name file parser.
//!
//! A name file lists one package per line:
//!
//! ```text
//! # comment
//! LIST          7  output/sagehen.lst
//! DIS           0  "input\sagehen.dis"
//! DATA(BINARY) 51  output/heads.bin  REPLACE
//! ```
//!
//! Blank lines and `#` comments are skipped. Tokens after the path are
//! options for the package reader and are ignored here.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::{OpenMode, PackageRegistry, UnitEntry, UnitKey, UnitRegistry};
use crate::namefile::errors::NameFileError;
use crate::util::fs::{resolve_package_path, PathAnchor};

/// Options for [`parse_name_file`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// What relative package paths are resolved against.
    pub anchor: PathAnchor,

    /// Log each file that could not be opened.
    pub verbose: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            anchor: PathAnchor::default(),
            verbose: true,
        }
    }
}

impl ParseOptions {
    /// Resolve package paths against a workspace directory.
    pub fn with_workspace(mut self, dir: impl Into<PathBuf>) -> Self {
        self.anchor = PathAnchor::workspace(dir);
        self
    }

    /// Resolve package paths next to a GSFLOW control file.
    pub fn with_control_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.anchor = PathAnchor::control_file(path);
        self
    }

    /// Set verbosity.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A data line split into its leading fields.
struct Record<'a> {
    filetype: String,
    unit: &'a str,
    path: &'a str,
}

/// Split a trimmed, non-comment line; `None` if it has fewer than 3 tokens.
fn split_record(line: &str) -> Option<Record<'_>> {
    let mut items = line.split_whitespace();
    let filetype = items.next()?.to_uppercase();
    let unit = items.next()?;
    let path = items.next()?;
    Some(Record {
        filetype,
        unit,
        path,
    })
}

/// Open a package file for reading. Anything other than a regular file,
/// such as a directory, is an error.
fn open_package_file(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_file() {
        Ok(file)
    } else {
        Err(io::Error::other("not a regular file"))
    }
}

/// Parse a name file into a unit registry.
///
/// Every package file is opened (binary for `DATA(BINARY)`, text otherwise)
/// and its handle kept in the returned entry; closing them is up to the
/// caller. A file that cannot be opened does not abort the parse: the entry
/// is still recorded, without a handle.
///
/// A later line with the same key replaces the earlier entry.
pub fn parse_name_file(
    path: &Path,
    packages: &PackageRegistry,
    options: &ParseOptions,
) -> Result<UnitRegistry, NameFileError> {
    if options.verbose {
        tracing::info!("Parsing the name file --> {}", path.display());
    }

    if !path.is_file() {
        return Err(NameFileError::NotFound {
            path: path.to_path_buf(),
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| NameFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut registry = UnitRegistry::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line_number = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let record = split_record(line).ok_or_else(|| NameFileError::TooFewItems {
            path: path.to_path_buf(),
            line_number,
            line: line.to_string(),
        })?;

        let file_path = resolve_package_path(record.path, &options.anchor);
        let mode = OpenMode::for_filetype(&record.filetype);

        // Both modes are a plain read-only open; the mode tells readers how
        // to interpret the bytes.
        let (handle, open_error) = match open_package_file(&file_path) {
            Ok(f) => (Some(f), None),
            Err(e) => {
                if options.verbose {
                    tracing::warn!(
                        "could not set filehandle to {} ({})",
                        file_path.display(),
                        e
                    );
                }
                (None, Some(e.to_string()))
            }
        };

        let unit: i64 = record
            .unit
            .parse()
            .map_err(|_| NameFileError::InvalidUnit {
                path: path.to_path_buf(),
                line_number,
                line: line.to_string(),
            })?;

        let key = if unit == 0 {
            match packages.reserved_unit_for(&record.filetype) {
                Some(reserved) => UnitKey::Unit(i64::from(reserved)),
                None => UnitKey::FileType(record.filetype.clone()),
            }
        } else {
            UnitKey::Unit(unit)
        };

        let mut entry = UnitEntry::new(&record.filetype, file_path, mode, handle)
            .with_package(packages.get(&record.filetype).cloned());
        if let Some(err) = open_error {
            entry = entry.with_open_error(err);
        }

        if let Some(previous) = registry.insert(key.clone(), entry) {
            tracing::debug!(
                "line {}: unit {} replaces earlier {} entry ({})",
                line_number,
                key,
                previous.filetype(),
                previous.path().display()
            );
        }
    }

    Ok(registry)
}

/// Unit key of the first entry with the given file type.
///
/// Comparison ignores case. When the file type is absent a message is
/// logged and `None` returned.
pub fn find_unit_for_type<'a>(registry: &'a UnitRegistry, filetype: &str) -> Option<&'a UnitKey> {
    let found = registry.find_unit_for_type(filetype);
    if found.is_none() {
        tracing::info!("Name file does not contain file of type \"{}\"", filetype);
    }
    found
}
