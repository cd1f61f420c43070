//! Logging setup using the `tracing` crate.
//!
//! Stdout carries exactly one result line per invocation, so all log output
//! goes to stderr. The `PROVENANCE_LOG` environment variable takes precedence
//! over the level selected by CLI flags.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with the given fallback level.
///
/// `level` is used when `PROVENANCE_LOG` is unset; pass `"off"` to silence
/// logging entirely. Safe to call once per process.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("PROVENANCE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
