use anyhow::{bail, Result};
use clap::Parser;

use crate::state::State;
use crate::utils::apps;

#[derive(Debug, Parser)]
#[clap(about = "Check whether Venmo is set up on this machine")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    // safe to unwrap here, login already fetched it
    let configuration = state.ctx.current.as_ref().unwrap();

    if !configuration.is_venmo_enabled() {
        bail!("Venmo is not enabled for this merchant");
    }

    if !apps::is_venmo_installed().await {
        bail!("Venmo is not installed");
    }

    log::info!("Venmo is ready to pay");

    Ok(())
}
