pub mod list;
pub mod login;
pub mod logout;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(login::Options),
    Logout(logout::Options),
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Authenticate with Quill")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Login(options) => login::handle(options, state).await,
        Commands::Logout(options) => logout::handle(&options, state).await,
        Commands::List(options) => list::handle(&options, &state),
    }
}
