pub mod checkout;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Checkout(checkout::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Pay with PayPal")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Checkout(options) => checkout::handle(&options, state).await,
    }
}
