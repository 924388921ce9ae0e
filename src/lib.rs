pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod types;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "quill",
    about = "🪶 Interact with Quill Payments via command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'm',
        long = "merchant",
        help = "ID of the merchant account to use",
        global = true
    )]
    pub merchant: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cli() {
        use super::*;
        use clap::CommandFactory;

        CLI::command().debug_assert();
    }
}
