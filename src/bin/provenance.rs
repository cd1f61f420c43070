//! Provenance CLI binary.

use clap::Parser;
use provenance::cli::Cli;
use provenance::logging::init_logging;
use provenance::provenance::provenance_hash;
use provenance::types::to_hex;
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_level());

    match provenance_hash(&cli.dir) {
        Ok(digest) => {
            println!("Provenance hash: {}", to_hex(&digest));
        }
        Err(e) => {
            error!("Provenance hash computation failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
