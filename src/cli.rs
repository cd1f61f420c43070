//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Compute a deterministic provenance hash over a directory's regular files.
#[derive(Debug, Parser)]
#[command(name = "provenance", version, about)]
pub struct Cli {
    /// Directory whose immediate files are fingerprinted
    pub dir: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable all logging
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Fallback log level implied by the flags; `PROVENANCE_LOG` overrides it.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "off"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
