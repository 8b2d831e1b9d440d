//! Garagist CLI binary.

use std::process;

use clap::Parser;
use garagist::cli::{args::*, commands::*};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse command line arguments using clap
    let args = GaragistArgs::parse();

    // Map verbosity onto the tracing filter; RUST_LOG wins if set.
    let default_level = match args.verbosity() {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Execute the command
    if let Err(e) = execute_command(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
