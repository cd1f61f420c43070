//! Digest computation using BLAKE3.
//!
//! Two levels: a content digest per file, then a fold of all per-file digests
//! (in sorted order) into the final provenance hash. This is a flat two-level
//! aggregation, not a Merkle tree; no inclusion proofs are supported.

use crate::types::Digest;
use blake3::Hasher;

/// Compute the 256-bit content digest of a byte slice.
pub fn content_digest(content: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(content);
    *hasher.finalize().as_bytes()
}

/// Fold a sequence of digests into one aggregate digest.
///
/// Feeds each digest's raw 32 bytes, in the order given, into a fresh hasher.
/// The caller is responsible for ordering; an empty sequence yields the digest
/// of empty input, which is well-defined.
pub fn fold_digests(digests: &[Digest]) -> Digest {
    let mut hasher = Hasher::new();
    for digest in digests {
        hasher.update(digest);
    }
    *hasher.finalize().as_bytes()
}
