//! Name file error types and diagnostics.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Structural failure while parsing a name file.
///
/// Any of these aborts the parse. Package files that cannot be opened are
/// not errors; see [`crate::core::UnitEntry::open_error`].
#[derive(Debug, Error, MietteDiagnostic)]
pub enum NameFileError {
    #[error("could not find {} in directory {}", .path.display(), .dir.display())]
    #[diagnostic(code(gsflow::namefile::not_found))]
    NotFound { path: PathBuf, dir: PathBuf },

    #[error("failed to read name file {}", .path.display())]
    #[diagnostic(code(gsflow::namefile::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line number {line_number} has fewer than 3 items: {line}")]
    #[diagnostic(
        code(gsflow::namefile::too_few_items),
        help("records have the form `<FILETYPE> <UNIT> <PATH> [OPTIONS...]`")
    )]
    TooFewItems {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("line number {line_number}: the unit number (second item) is not an integer: {line}")]
    #[diagnostic(
        code(gsflow::namefile::invalid_unit),
        help("use an integer unit number, or 0 to let the package type choose")
    )]
    InvalidUnit {
        path: PathBuf,
        line_number: usize,
        line: String,
    },
}

impl NameFileError {
    /// 1-based line number, for line-level errors.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            NameFileError::TooFewItems { line_number, .. }
            | NameFileError::InvalidUnit { line_number, .. } => Some(*line_number),
            NameFileError::NotFound { .. } | NameFileError::Read { .. } => None,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            NameFileError::NotFound { path, .. } => Diagnostic::error(self.to_string())
                .with_location(path, None)
                .with_suggestion(suggestions::CHECK_NAME_FILE),

            NameFileError::Read { path, source } => Diagnostic::error(self.to_string())
                .with_location(path, None)
                .with_context(source.to_string()),

            NameFileError::TooFewItems {
                path,
                line_number,
                line,
            } => Diagnostic::error(format!("line {} has fewer than 3 items", line_number))
                .with_location(path, Some(*line_number))
                .with_context(line.clone())
                .with_suggestion(suggestions::RECORD_FORMAT),

            NameFileError::InvalidUnit {
                path,
                line_number,
                line,
            } => Diagnostic::error(format!(
                "line {}: the unit number is not an integer",
                line_number
            ))
            .with_location(path, Some(*line_number))
            .with_context(line.clone())
            .with_suggestion(suggestions::UNIT_FORMAT),
        }
    }
}
