//! Errors reported while reading input files or writing a concordance.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Error that occurs while building or writing a concordance
#[derive(Error, Debug)]
pub enum ConcordanceError {
    /// An input file does not exist
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was opened
        path: PathBuf,
    },
    /// Any other failure while reading or writing a file
    #[error("i/o error on {}", .path.display())]
    Io {
        /// Path of the file being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl ConcordanceError {
    /// Classifies an error raised while reading `path`.
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ConcordanceError::FileNotFound {
                path: path.to_owned(),
            }
        } else {
            Self::io(path, source)
        }
    }
    /// Wraps any other error raised while accessing `path`.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ConcordanceError::Io {
            path: path.to_owned(),
            source,
        }
    }
    /// Returns `true` for [`ConcordanceError::FileNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConcordanceError::FileNotFound { .. })
    }
}
