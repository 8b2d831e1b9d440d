//! Command line argument parsing for the garagist CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Garagist - query-to-service recommendation engine for a car service shop
#[derive(Parser, Debug, Clone)]
#[command(name = "garagist")]
#[command(about = "Query-to-service recommendation engine for a car service shop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GaragistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GaragistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the recommendation server and the live analytics feed
    Serve(ServeArgs),

    /// Resolve a single query against the catalog and print the result
    Query(QueryArgs),

    /// Rebuild the classifier artifact from the built-in training set
    Train(TrainArgs),
}

/// Arguments for running the server
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port for the main HTTP surface
    #[arg(long, env = "GARAGIST_HTTP_PORT", default_value_t = 4000)]
    pub http_port: u16,

    /// Port for the live feed WebSocket server
    #[arg(long, env = "GARAGIST_FEED_PORT", default_value_t = 4001)]
    pub feed_port: u16,

    /// Directory holding the classifier artifact and the query log
    #[arg(long, env = "GARAGIST_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

/// Arguments for a one-shot query
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// The customer query text
    pub text: String,

    /// Directory holding the classifier artifact and the query log
    #[arg(long, env = "GARAGIST_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

/// Arguments for retraining the classifier
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Directory to write the classifier artifact into
    #[arg(long, env = "GARAGIST_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Overwrite an existing artifact
    #[arg(long)]
    pub force: bool,
}
