//! jira-sdk - command-line access to the Jira Cloud REST API.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use jira_sdk::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            ExitCode::FAILURE
        }
    }
}
