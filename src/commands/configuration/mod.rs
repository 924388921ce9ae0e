pub mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use self::utils::{format_configuration, get_configuration};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show the gateway configuration for the current merchant")]
pub struct Options {
    #[clap(
        short = 'r',
        long = "refresh",
        help = "Fetch a fresh configuration instead of using the cache"
    )]
    pub refresh: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let token = state.token().context("No token in state")?;

    let cached = get_configuration(&state.http, &token, options.refresh).await?;

    let configuration_fmt = format_configuration(&cached)?;

    println!("{}", configuration_fmt.join("\n"));

    Ok(())
}
