pub mod auth;
pub mod completions;
pub mod configuration;
pub mod paypal;
pub mod preferred;
pub mod venmo;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    Completions(completions::Options),
    #[clap(alias = "config")]
    Configuration(configuration::Options),
    Preferred(preferred::Options),
    Venmo(venmo::Options),
    Paypal(paypal::Options),
}

pub async fn handle_command(command: Commands, mut state: State) -> Result<()> {
    match command {
        Commands::Auth(options) => auth::handle(options, state).await,
        Commands::Completions(options) => {
            completions::handle(&options);
            Ok(())
        }

        authorized_command => {
            // login so these commands can run
            state.login(None).await?;

            match authorized_command {
                Commands::Auth(_) | Commands::Completions(_) => unreachable!(),
                Commands::Configuration(options) => configuration::handle(&options, &state).await,
                Commands::Preferred(options) => preferred::handle(&options, &state).await,
                Commands::Venmo(options) => venmo::handle(options, &state).await,
                Commands::Paypal(options) => paypal::handle(options, &state).await,
            }
        }
    }
}
