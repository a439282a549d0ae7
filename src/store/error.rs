//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing a storage slot
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a collection for storage failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded into a collection
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// Slot names must be non-empty ASCII alphanumerics, `-` or `_`
    #[error("Invalid slot key {0:?}")]
    InvalidKey(String),
}
