//! Error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// `Result` type alias for operations that can lead to errors.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Errors in reading reviews or word index mappings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A file could not be opened.
    #[error("Cannot open '{}': {error}", .path.display())]
    FileAccess { path: PathBuf, error: io::Error },

    /// I/O error after a file or stream was opened.
    #[error("{desc}: {error}")]
    Read { desc: String, error: io::Error },

    /// Malformed content.
    #[error("{0}")]
    Format(String),
}

impl Error {
    pub fn file_access(path: impl AsRef<Path>, error: io::Error) -> Self {
        Error::FileAccess {
            path: path.as_ref().to_owned(),
            error,
        }
    }

    pub fn read_error(desc: impl Into<String>, error: io::Error) -> Self {
        Error::Read {
            desc: desc.into(),
            error,
        }
    }

    /// Returns `true` when a file or stream could not be opened or read.
    pub fn is_file_access(&self) -> bool {
        matches!(self, Error::FileAccess { .. } | Error::Read { .. })
    }
}
