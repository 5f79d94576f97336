//! Filesystem and path utilities.
//!
//! Name files are frequently authored on one platform and run on another,
//! so package paths arrive with foreign separators, stray quotes, and
//! casing that does not match what is on disk. The helpers here turn such
//! a token into a usable host path.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// What a relative package path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathAnchor {
    /// Join relative paths onto a model workspace directory.
    Workspace(PathBuf),

    /// Resolve relative paths against the directory of a GSFLOW control file.
    ControlFile(PathBuf),
}

impl PathAnchor {
    /// Anchor at a workspace directory.
    pub fn workspace(dir: impl Into<PathBuf>) -> Self {
        PathAnchor::Workspace(dir.into())
    }

    /// Anchor at a control file.
    pub fn control_file(path: impl Into<PathBuf>) -> Self {
        PathAnchor::ControlFile(path.into())
    }

    /// Join a host-native relative path onto this anchor.
    pub fn join(&self, relative: &Path) -> PathBuf {
        match self {
            PathAnchor::Workspace(ws) => ws.join(relative),
            PathAnchor::ControlFile(control) => resolve_absolute_path(control, relative),
        }
    }
}

impl Default for PathAnchor {
    fn default() -> Self {
        PathAnchor::Workspace(PathBuf::from("."))
    }
}

/// Convert a raw path token into a host-native path.
///
/// All `"` and `'` characters are removed, wherever they appear. The token
/// is split on `/` if it contains one, otherwise on `\`; only one separator
/// style is honoured, so a mixed token is split on `/` alone. Empty
/// segments are dropped, which means a leading separator does not make
/// the result absolute.
pub fn normalize_separators(raw: &str) -> PathBuf {
    let cleaned: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();

    let sep = if cleaned.contains('/') {
        Some('/')
    } else if cleaned.contains('\\') {
        Some('\\')
    } else {
        None
    };

    let Some(sep) = sep else {
        return PathBuf::from(cleaned);
    };

    let mut path = PathBuf::new();
    for segment in cleaned.split(sep).filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

/// Build an absolute path for `relative` next to `control_file`.
///
/// Absolute inputs are returned untouched. Otherwise the path is joined
/// onto the control file's directory, made absolute against the current
/// directory, and `.`/`..` components are collapsed lexically.
pub fn resolve_absolute_path(control_file: &Path, relative: &Path) -> PathBuf {
    if relative.is_absolute() {
        return relative.to_path_buf();
    }

    let base = control_file.parent().unwrap_or(Path::new("."));
    let joined = base.join(relative);
    let absolute = std::path::absolute(&joined).unwrap_or(joined);
    lexical_clean(&absolute)
}

/// Remove `.` components and fold `..` into its parent without touching disk.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Substitute the on-disk spelling of a file whose declared casing is wrong.
///
/// If `path` is not an existing file, its parent directory is listed and an
/// entry matching the file name case-insensitively is used instead, but only
/// when exactly one such entry exists. Any failure leaves `path` unchanged.
pub fn match_case_insensitive(path: &Path) -> PathBuf {
    if path.is_file() {
        return path.to_path_buf();
    }

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return path.to_path_buf();
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let Ok(entries) = fs::read_dir(dir) else {
        return path.to_path_buf();
    };

    let wanted = name.to_lowercase();
    let mut matches = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name())
        .filter(|n| n.to_str().is_some_and(|s| s.to_lowercase() == wanted));

    match (matches.next(), matches.next()) {
        (Some(found), None) => {
            let resolved = path.with_file_name(found);
            tracing::debug!(
                "using {} for declared path {}",
                resolved.display(),
                path.display()
            );
            resolved
        }
        _ => path.to_path_buf(),
    }
}

/// Resolve a package path token from a name file.
pub fn resolve_package_path(raw: &str, anchor: &PathAnchor) -> PathBuf {
    let relative = normalize_separators(raw);
    match_case_insensitive(&anchor.join(&relative))
}
