//! Error types for the renamer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while deriving a name for a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The document produced no usable text blocks.
    #[error("document has no usable content")]
    EmptyInput,

    /// Every top-ranked candidate sanitized to an empty string.
    #[error("no title found")]
    NoTitleFound,

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The file cannot be processed (missing, empty, too large ...).
    #[error("invalid file {}: {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },

    /// No reader handles this file extension.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A block export could not be decoded.
    #[error("malformed block export: {0}")]
    BlockFormat(String),

    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error only means "skip this document" rather than a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::NoTitleFound)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::BlockFormat(err.to_string())
    }
}
