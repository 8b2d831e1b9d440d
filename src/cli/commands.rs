//! Command implementations for the garagist CLI.

use std::sync::Arc;

use crate::analysis::analyzer::StemmingAnalyzer;
use crate::classify::{builtin_training_set, ServiceClassifier};
use crate::cli::args::{Command, GaragistArgs, QueryArgs, ServeArgs, TrainArgs};
use crate::error::GaragistError;
use crate::server::{self, AppState, ServerConfig, CLASSIFIER_FILE};

/// Execute a CLI command.
pub async fn execute_command(args: GaragistArgs) -> anyhow::Result<()> {
    match &args.command {
        Command::Serve(serve_args) => run_server(serve_args.clone()).await,
        Command::Query(query_args) => run_query(query_args.clone()),
        Command::Train(train_args) => run_train(train_args.clone(), &args),
    }
}

/// Run the HTTP surface and the live feed until interrupted.
async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    server::serve(ServerConfig {
        http_port: args.http_port,
        feed_port: args.feed_port,
        data_dir: args.data_dir,
    })
    .await
}

/// Resolve one query through the full engine and print the response.
///
/// This goes through the same path as `POST /recommend`, including the
/// query log append.
fn run_query(args: QueryArgs) -> anyhow::Result<()> {
    let state = AppState::initialize(&args.data_dir)?;
    let response = state.recommend(&args.text)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Rebuild the classifier artifact from the compiled-in training set.
fn run_train(args: TrainArgs, cli_args: &GaragistArgs) -> anyhow::Result<()> {
    let path = args.data_dir.join(CLASSIFIER_FILE);
    if path.exists() && !args.force {
        return Err(GaragistError::config(
            "Classifier artifact already exists. Use --force to retrain.",
        )
        .into());
    }

    let analyzer = Arc::new(StemmingAnalyzer::new()?);
    let classifier = ServiceClassifier::train(&builtin_training_set(), analyzer)?;
    classifier.save(&path)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Trained classifier over {} services -> {}",
            classifier.labels().len(),
            path.display()
        );
    }
    Ok(())
}
