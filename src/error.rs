//! Error types and handling infrastructure for bible-reader.
//!
//! Library code returns [`BibleError`] through the crate-wide [`Result`] alias. The
//! binaries wrap these in `anyhow` and add context at the call site.
//!
//! Only fatal conditions are errors here. Malformed flat-format lines, unmatched dump
//! tuples and empty query results are handled in-band by the modules that meet them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bible-reader operations.
#[derive(Error, Debug)]
pub enum BibleError {
    /// File system related errors (unreadable dump, unwritable output, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// The external decompression program could not be started
    #[error("Failed to launch decompressor `{program}`")]
    DecompressorLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external decompression program ran but reported failure
    #[error("Decompressor `{program}` failed: {status}")]
    DecompressorFailed { program: String, status: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for bible-reader operations.
pub type Result<T> = std::result::Result<T, BibleError>;

impl BibleError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a DecompressorLaunch error for a program that would not start
    pub fn decompressor_launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::DecompressorLaunch {
            program: program.into(),
            source,
        }
    }

    /// Create a DecompressorFailed error from the program's exit status description
    pub fn decompressor_failed(program: impl Into<String>, status: impl Into<String>) -> Self {
        Self::DecompressorFailed {
            program: program.into(),
            status: status.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for BibleError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::FileError {
            message: message.to_string(),
            source: err,
        }
    }
}
