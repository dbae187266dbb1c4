//! Errors raised while saving or loading records.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to persist or restore a record.
#[derive(Debug)]
pub enum RecordError {
    /// The file could not be opened, read or written.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The contents could not be encoded or decoded.
    Format {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// Saving without `overwrite` onto an existing file.
    AlreadyExists {
        /// The existing file.
        path: PathBuf,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Format { path, source } => {
                write!(f, "{}: malformed record: {source}", path.display())
            }
            Self::AlreadyExists { path } => {
                write!(f, "file '{}' already exists", path.display())
            }
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
            Self::AlreadyExists { .. } => None,
        }
    }
}
