//! Error types for the tagdoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tagdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during documentation extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    ///
    /// Split out from [`Error::Io`] so the driver can recover from a missing
    /// input without pattern-matching on `io::ErrorKind`.
    #[error("Error: File '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    /// A tag marker followed by an invalid tag name, in strict mode only.
    #[error("malformed tag line in block {block}: {line:?}")]
    MalformedTag {
        /// Zero-based index of the comment block containing the line.
        block: usize,
        /// The offending line, trimmed.
        line: String,
    },

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Map a read failure on `path` to the recoverable not-found kind where
    /// applicable, passing everything else through as [`Error::Io`].
    pub(crate) fn from_read(err: io::Error, path: &std::path::Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Error::InputNotFound(path.to_path_buf())
        } else {
            Error::Io(err)
        }
    }
}
