use anyhow::{bail, Context, Result};
use clap::Parser;

use super::utils::{create_payment_resource, PaymentResourceRequest};
use crate::state::analytics;
use crate::state::State;
use crate::types::PostalAddress;
use crate::utils::urlify;

#[derive(Debug, Parser)]
#[clap(about = "Start a PayPal checkout")]
pub struct Options {
    #[clap(short = 'a', long = "amount", help = "Amount to charge, e.g. 9.99")]
    pub amount: String,

    #[clap(
        short = 'c',
        long = "currency",
        help = "ISO currency code",
        default_value = "USD"
    )]
    pub currency: String,

    #[clap(
        long = "ba",
        help = "Set up a billing agreement instead of a one-time payment"
    )]
    pub billing_agreement: bool,

    #[clap(
        long = "shipping",
        help = "Shipping address override as JSON",
        value_parser = parse_shipping
    )]
    pub shipping: Option<PostalAddress>,

    #[clap(long = "no-open", help = "Print the approval URL instead of opening it")]
    pub no_open: bool,
}

fn parse_shipping(s: &str) -> Result<PostalAddress> {
    let address: PostalAddress =
        serde_json::from_str(s).context("Invalid shipping address JSON")?;

    if address.is_empty() {
        bail!("Shipping address must include a country code");
    }

    Ok(address)
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    analytics::track(&state.http, "paypal.selected").await.ok();

    // safe to unwrap here, login already fetched it
    let configuration = state.ctx.current.as_ref().unwrap();

    if !configuration.is_paypal_enabled() {
        bail!("PayPal is not enabled for this merchant");
    }

    let resource = create_payment_resource(
        &state.http,
        &PaymentResourceRequest {
            amount: &options.amount,
            currency: &options.currency,
            billing_agreement: options.billing_agreement,
            shipping: options.shipping.as_ref(),
        },
    )
    .await?;

    analytics::track(&state.http, "paypal.payment-resource.created")
        .await
        .ok();

    if options.no_open {
        println!("{}", resource.redirect_url);

        return Ok(());
    }

    log::info!(
        "Opening {} in your browser",
        urlify(&resource.redirect_url)
    );

    if webbrowser::open(&resource.redirect_url).is_err() {
        log::warn!("Could not open a browser, visit the URL above to approve the payment");
    }

    Ok(())
}
