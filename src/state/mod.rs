pub mod analytics;
pub mod http;

use anyhow::{ensure, Result};

use self::http::HttpClient;
use crate::commands::auth::utils::TokenType;
use crate::commands::configuration::utils::get_configuration;
use crate::config::EXEC_NAME;
use crate::store::auth::Auth;
use crate::store::context::Context;
use crate::store::Store;

#[derive(Debug)]
pub struct State {
    pub auth: Auth,
    pub ctx: Context,
    pub http: HttpClient,
    token: Option<String>,
    token_type: Option<TokenType>,
}

pub struct StateOptions {
    pub override_merchant: Option<String>,
    pub override_token: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let auth = Auth::new().await?;
        let mut ctx = Context::new().await?;

        // override the merchant id if provided
        ctx.merchant_override = options
            .override_merchant
            .or_else(|| ctx.default_merchant.clone());

        // use the override token if provided
        let init_token = if let Some(override_token) = options.override_token {
            Some(override_token)
        // otherwise use the token from the store
        } else if let Some(ref merchant) = ctx.merchant_override {
            auth.authorized.get(merchant).map(ToString::to_string)
        // if all fail then no token
        } else {
            None
        };

        let (token, token_type) = Self::handle_token(init_token)?;

        let http = HttpClient::new(token.clone(), Self::api_url(&ctx, token_type.as_ref()));

        Ok(State {
            token_type,
            token,
            http,
            auth,
            ctx,
        })
    }

    /// The tokenization key prefix decides which gateway environment the
    /// client talks to.
    fn handle_token(token: Option<String>) -> Result<(Option<String>, Option<TokenType>)> {
        let token_type = match token {
            Some(ref token) => Some(TokenType::from_token(token)?),
            None => None,
        };

        Ok((token, token_type))
    }

    fn api_url(ctx: &Context, token_type: Option<&TokenType>) -> Option<String> {
        std::env::var("QUILL_API_URL")
            .ok()
            .or_else(|| ctx.override_api_url.clone())
            .or_else(|| token_type.map(|token_type| token_type.base_url().to_string()))
    }

    /// Login to the gateway by fetching the merchant configuration.
    pub async fn login(&mut self, token: Option<String>) -> Result<()> {
        ensure!(
            token.is_some() || self.token.is_some(),
            "You are not logged in. Please run `{} auth login` first.",
            EXEC_NAME
        );

        if let Some(token) = token {
            let (token, token_type) = Self::handle_token(Some(token))?;

            self.token = token.clone();
            self.token_type = token_type;
            self.http = HttpClient::new(token, Self::api_url(&self.ctx, self.token_type.as_ref()));
        }

        // safe to unwrap here
        let token = self.token.clone().unwrap();

        let cached = get_configuration(&self.http, &token, false).await?;
        self.ctx.current = Some(cached.configuration);

        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
