pub mod pay;
pub mod ready;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Ready(ready::Options),
    Pay(pay::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Pay with Venmo")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Ready(options) => ready::handle(&options, state).await,
        Commands::Pay(options) => pay::handle(&options, state).await,
    }
}
