//! Core types shared across the crate.

/// A 256-bit digest value.
pub type Digest = [u8; 32];

/// Render a digest as 64 lowercase hex characters.
pub fn to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
