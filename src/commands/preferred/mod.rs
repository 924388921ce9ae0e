pub mod types;
pub mod utils;

use anyhow::Result;
use clap::Parser;

use self::utils::{fetch_preferred_payment_methods, format_preferred};
use crate::state::State;
use crate::utils::apps;

#[derive(Debug, Parser)]
#[clap(about = "Show which payment methods the user prefers")]
pub struct Options {
    #[clap(
        short = 'q',
        long = "quiet",
        help = "Only print the preferred method names"
    )]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let venmo_installed = apps::is_venmo_installed().await;

    let result = fetch_preferred_payment_methods(&state.http, venmo_installed).await;

    if options.quiet {
        let mut preferred = vec![];

        if result.paypal_preferred() {
            preferred.push("paypal");
        }

        if result.venmo_preferred() {
            preferred.push("venmo");
        }

        println!("{}", preferred.join(" "));
    } else {
        let preferred_fmt = format_preferred(&result, true)?;

        println!("{}", preferred_fmt.join("\n"));
    }

    Ok(())
}
