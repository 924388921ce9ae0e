#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use quill_cli::commands::handle_command;
use quill_cli::state::{State, StateOptions};
use quill_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    // create a new CLI instance
    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        override_merchant: cli.merchant,
        override_token: std::env::var("QUILL_TOKEN").ok(),
    })
    .await?;

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{}", error);
        std::process::exit(1);
    }

    Ok(())
}
