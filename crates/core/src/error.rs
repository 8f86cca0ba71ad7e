//! Error types for the huffer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the huffer library.
#[derive(Error, Debug)]
pub enum HuffError {
    /// Container has no elements for an operation that requires one
    #[error("Sequence is empty")]
    Empty,

    /// Value is not present in the container
    #[error("Value not found")]
    NotFound,

    /// Index outside of `[0, len)`
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Caller passed something the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Frequency model built from an empty text
    #[error("Input text is empty")]
    EmptyInput,

    /// Encoding hit a symbol that has no code
    #[error("Symbol has no code in the table: {0:?}")]
    UnknownSymbol(String),

    /// Bits left over at the end of a bit-string that complete no code
    #[error("Bit-string ends with an incomplete code starting at bit {offset}")]
    TruncatedBits { offset: usize },

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error loading a saved archive
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving an archive
    #[error("Save error: {0}")]
    Save(String),
}

/// Result type alias for huffer operations.
pub type Result<T> = std::result::Result<T, HuffError>;
