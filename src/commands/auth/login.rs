use anyhow::Result;
use clap::Parser;

use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Login to Quill")]
pub struct Options {
    #[clap(
        long = "token",
        help = "Tokenization key",
        long_help = "Tokenization key, you can use `--token=` to take the key from stdin"
    )]
    pub token: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let init_token = if let Some(token) = options.token {
        token
    } else if let Ok(env_token) = std::env::var("QUILL_TOKEN") {
        env_token
    } else {
        dialoguer::Password::new()
            .with_prompt("Tokenization key")
            .interact()?
    };

    token(&init_token, state).await
}

pub async fn token(token: &str, mut state: State) -> Result<()> {
    state.login(Some(token.to_string())).await?;

    // safe to unwrap here
    let configuration = state.ctx.current.clone().unwrap();
    let merchant = configuration.merchant_id.clone();

    if Some(merchant.clone()) == state.ctx.default_merchant {
        log::info!(
            "Nothing was changed. You are already logged in as: `{merchant}` ({})",
            configuration.environment
        );
        return Ok(());
    }

    // save the state
    state
        .auth
        .authorized
        .insert(merchant.clone(), token.to_string());
    state.auth.save().await?;

    state.ctx.default_merchant = Some(merchant.clone());
    state.ctx.save().await?;

    // output the login info
    log::info!(
        "Logged in as: `{merchant}` ({})",
        configuration.environment
    );

    Ok(())
}
