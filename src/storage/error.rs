//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading corpora and writing rankings.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Corpus or output path exists but is not a directory.
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A corpus directory or document could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rankings could not be CBOR-encoded.
    #[error("failed to encode rankings: {0}")]
    Encode(#[from] serde_cbor::Error),
}
