use anyhow::{bail, Result};
use clap::Parser;

use super::utils::{create_payment_context, nonce_from_payment_context, vault_venmo_account};
use crate::state::analytics;
use crate::state::State;
use crate::utils::apps;

#[derive(Debug, Parser)]
#[clap(about = "Tokenize a Venmo account")]
pub struct Options {
    #[clap(
        long = "profile",
        help = "Venmo profile ID to use, defaults to the merchant profile"
    )]
    pub profile: Option<String>,

    #[clap(long = "vault", help = "Vault the payment method without asking")]
    pub vault: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    analytics::track(&state.http, "pay-with-venmo.selected")
        .await
        .ok();

    // safe to unwrap here, login already fetched it
    let configuration = state.ctx.current.clone().unwrap();

    if !configuration.is_venmo_enabled() {
        analytics::track(&state.http, "pay-with-venmo.app-switch.failed")
            .await
            .ok();

        bail!("Venmo is not enabled for this merchant");
    }

    if !apps::is_venmo_installed().await {
        analytics::track(&state.http, "pay-with-venmo.app-switch.failed")
            .await
            .ok();

        bail!("Venmo is not installed");
    }

    let profile = options
        .profile
        .clone()
        .or_else(|| configuration.venmo_merchant_id());

    let context_id = match create_payment_context(&state.http, profile.as_deref()).await {
        Ok(context_id) => context_id,
        Err(error) => {
            analytics::track(&state.http, "pay-with-venmo.app-switch.failed")
                .await
                .ok();

            return Err(error);
        }
    };

    log::debug!("Created payment context `{context_id}`");

    analytics::track(&state.http, "pay-with-venmo.app-switch.started")
        .await
        .ok();

    let nonce = nonce_from_payment_context(&state.http, &context_id).await?;

    analytics::track(&state.http, "pay-with-venmo.app-switch.success")
        .await
        .ok();

    match &nonce.username {
        Some(username) => log::info!("Tokenized Venmo account for `{username}`"),
        None => log::info!("Tokenized Venmo account"),
    }

    println!("{}", nonce.nonce);

    let should_vault = options.vault
        || dialoguer::Confirm::new()
            .with_prompt("Vault this payment method for reuse?")
            .default(false)
            .interact()?;

    if should_vault {
        match vault_venmo_account(&state.http, &nonce.nonce).await {
            Ok(vaulted) => {
                analytics::track(&state.http, "pay-with-venmo.vault.success")
                    .await
                    .ok();

                log::info!("Vaulted as `{}`", vaulted.token);
            }
            Err(error) => {
                analytics::track(&state.http, "pay-with-venmo.vault.failed")
                    .await
                    .ok();

                return Err(error);
            }
        }
    }

    Ok(())
}
