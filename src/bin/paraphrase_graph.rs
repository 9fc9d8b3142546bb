//! paraphrase-graph CLI binary.

use std::process;

use clap::Parser;
use paraphrase::cli::{Args, execute};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    // RUST_LOG wins over the verbosity flags.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = execute(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
