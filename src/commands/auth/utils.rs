use std::io::Write;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tabwriter::TabWriter;

use crate::config::{API_BASE_URL, SANDBOX_API_BASE_URL};
use crate::store::auth::Auth;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub enum TokenType {
    #[serde(rename = "SANDBOX")]
    Sandbox,
    #[serde(rename = "PRODUCTION")]
    Production,
}

impl FromStr for TokenType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(&format!("\"{}\"", s.to_uppercase()))
            .map_err(|_| anyhow!("Could not parse token type: {}", s))
    }
}

impl TokenType {
    /// Tokenization keys look like `sandbox_abc123_merchant`, the prefix
    /// names the gateway environment.
    pub fn from_token(token: &str) -> Result<Self> {
        Self::from_str(token.split('_').next().unwrap_or(""))
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_API_BASE_URL,
            Self::Production => API_BASE_URL,
        }
    }
}

pub fn mask_token(token: &str) -> String {
    match token.split_once('_') {
        Some((environment, _)) => format!("{environment}_********"),
        None => "********".to_string(),
    }
}

pub fn format_merchants(auth: &Auth, title: bool) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "MERCHANT\tKEY")?;
    }

    for (merchant, token) in &auth.authorized {
        writeln!(&mut tw, "{merchant}\t{}", mask_token(token))?;
    }

    let out = String::from_utf8(tw.into_inner().unwrap())?
        .lines()
        .map(std::string::ToString::to_string)
        .collect();

    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(
            TokenType::from_token("sandbox_abc123_merchant").unwrap(),
            TokenType::Sandbox
        );
        assert_eq!(
            TokenType::from_token("production_abc123_merchant").unwrap(),
            TokenType::Production
        );
    }

    #[test]
    fn test_from_token_invalid() {
        assert!(TokenType::from_token("").is_err());
        assert!(TokenType::from_token("staging_abc123_merchant").is_err());
        assert!(TokenType::from_token("not a key").is_err());
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(
            mask_token("sandbox_abc123_merchant"),
            "sandbox_********"
        );
        assert_eq!(mask_token("garbage"), "********");
    }
}
