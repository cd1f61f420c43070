//! Provenance: Deterministic Directory Fingerprinting
//!
//! Computes a single 256-bit "provenance hash" over the immediate regular files
//! of a directory, so consumers can verify the exact set and content of inputs
//! used to produce some output. Files are ordered by a derived sort key before
//! hashing, so the result never depends on filesystem enumeration order.

pub mod cli;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod provenance;
pub mod types;
pub mod walker;
