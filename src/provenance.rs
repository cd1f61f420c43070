//! Provenance hash pipeline: enumerate, sort, hash, fold.

use crate::error::ProvenanceError;
use crate::hasher;
use crate::types::Digest;
use crate::walker;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Compute the provenance hash of a directory.
///
/// Hashes the content of each immediate regular file, then folds the per-file
/// digests, ordered by derived sort key, into one aggregate digest. Identical
/// directory content yields an identical result regardless of on-disk
/// enumeration order, as long as no two files share a sort key. Any read
/// failure aborts the whole computation.
pub fn provenance_hash(dir: &Path) -> Result<Digest, ProvenanceError> {
    let entries = walker::list_sorted_files(dir)?;
    debug!(dir = ?dir, files = entries.len(), "computing provenance hash");

    let mut digests = Vec::with_capacity(entries.len());
    for entry in &entries {
        let content = fs::read(&entry.path).map_err(|e| ProvenanceError::ReadError {
            path: entry.path.clone(),
            source: e,
        })?;
        let digest = hasher::content_digest(&content);
        debug!(path = ?entry.path, key = %entry.sort_key, "hashed file");
        digests.push(digest);
    }

    Ok(hasher::fold_digests(&digests))
}
