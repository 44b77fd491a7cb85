//! Error types for uninorm
//!
//! All fallible operations return `Result<T, Error>`.
//! Every variant names the file it concerns so the message stands on its own.

use std::io;
use std::path::PathBuf;

use crate::decode::Position;

/// uninorm error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input path does not exist
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Input path exists but is not a regular file
    #[error("input is not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    /// Input bytes are not valid UTF-8
    #[error("{}: invalid UTF-8 at {position}: {reason}", .path.display())]
    Decode {
        path: PathBuf,
        position: Position,
        reason: String,
    },

    /// Unknown normalization form name
    #[error("invalid normalization form: {0:?} (expected NFC, NFD, NFKC or NFKD)")]
    InvalidForm(String),

    /// Reading the input failed
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the output failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Short machine-friendly category name
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InputNotFound { .. } | Error::NotAFile { .. } => "input-not-found",
            Error::Decode { .. } => "decode-error",
            Error::InvalidForm(_) => "normalization-form-invalid",
            Error::Read { .. } => "read-error",
            Error::Write { .. } => "write-error",
        }
    }
}

/// Result type alias for uninorm operations
pub type Result<T> = std::result::Result<T, Error>;
