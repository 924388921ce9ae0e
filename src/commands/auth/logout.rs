use anyhow::{bail, Result};
use clap::Parser;

use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current merchant")]
pub struct Options {
    #[clap(help = "ID of the merchant to logout, defaults to the current one")]
    pub merchant: Option<String>,
}

pub async fn handle(options: &Options, mut state: State) -> Result<()> {
    let Some(merchant) = options
        .merchant
        .clone()
        .or_else(|| state.ctx.current_merchant())
    else {
        bail!("No merchant to logout");
    };

    if state.auth.authorized.remove(&merchant).is_none() {
        bail!("Merchant `{merchant}` is not logged in");
    }

    state.auth.save().await?;

    if state.ctx.default_merchant == Some(merchant.clone()) {
        state.ctx.default_merchant = None;
        state.ctx.save().await?;
    }

    log::info!("Logged out `{merchant}`");

    Ok(())
}
