//! Error types for the provenance hasher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while computing a provenance hash.
///
/// Every error is fatal: there is no retry and no partial result.
#[derive(Debug, Error)]
pub enum ProvenanceError {
    #[error("Not a readable directory: {0:?}")]
    InvalidDirectory(PathBuf),

    #[error("Failed to list directory {path:?}: {source}")]
    WalkError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
