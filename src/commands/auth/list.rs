use anyhow::Result;
use clap::Parser;

use super::utils::format_merchants;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all authorized merchants")]
pub struct Options {
    #[clap(
        short = 'q',
        long = "quiet",
        help = "Only print the IDs of the authorized merchants"
    )]
    pub quiet: bool,
}

pub fn handle(options: &Options, state: &State) -> Result<()> {
    if options.quiet {
        let ids = state
            .auth
            .authorized
            .keys()
            .map(|merchant| merchant.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");
    } else {
        let merchants_fmt = format_merchants(&state.auth, true)?;

        println!("{}", merchants_fmt.join("\n"));
    }

    Ok(())
}
