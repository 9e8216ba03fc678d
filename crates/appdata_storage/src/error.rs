//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// Absence is never an error: a missing key surfaces as `Ok(None)`
/// from reads, and removing a missing key is `Ok(())`. Likewise,
/// persisted text that fails to parse reads as `Ok(None)`. The
/// variants here are genuine failures only.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred (permissions, disk failure - not absence).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored content was read as text but is not valid UTF-8.
    #[error("content at {key:?} is not valid UTF-8")]
    Utf8 {
        /// The full key whose content failed to decode.
        key: String,
    },

    /// The remote backend answered with a status other than 200 or 404.
    #[error("HTTP status {status} fetching {url}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The URL that was fetched.
        url: String,
    },

    /// The HTTP transport itself failed (connection, TLS, timeout).
    #[error("HTTP transport failure: {0}")]
    Transport(String),

    /// Raw bytes reached a backend that can only store text.
    ///
    /// Unreachable through the store layer, which encodes binary
    /// values before they hit a text-only backend.
    #[error("backend cannot store raw bytes at {key:?}")]
    BinaryNotSupported {
        /// The full key of the rejected write.
        key: String,
    },
}
