//! inbox-ingest - change notification webhook that archives mail into a
//! document store

#![allow(missing_docs)]

use clap::Parser;
use inbox_ingest::server::builder::{load_config, run_server};
use inbox_ingest::utils::{bootstrap_logging, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "inbox-ingest", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "INGEST_CONFIG", default_value = "config/ingest.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Loading warns about a missing file or token before the configured logger exists
    let bootstrap = bootstrap_logging();
    let config = match load_config(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    drop(bootstrap);

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
