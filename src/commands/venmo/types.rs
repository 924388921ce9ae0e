use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// A tokenized Venmo account returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenmoAccountNonce {
    pub nonce: String,
    pub username: Option<String>,
}

impl VenmoAccountNonce {
    /// Reads the nonce out of a payment context query response. Unlike the
    /// preferred payment methods payload, a context without a payment
    /// method is an error.
    pub fn from_graphql(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).context("Invalid payment context response")?;

        let nonce = value
            .pointer("/data/node/paymentMethodId")
            .and_then(Value::as_str)
            .context("Payment context has no payment method")?
            .to_string();

        let username = value
            .pointer("/data/node/userName")
            .and_then(Value::as_str)
            .map(std::string::ToString::to_string);

        Ok(Self { nonce, username })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct VaultedVenmoAccount {
    pub token: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_graphql() {
        let json = r#"{
            "data": {
                "node": {
                    "paymentMethodId": "fake-venmo-nonce",
                    "userName": "venmojoe"
                }
            }
        }"#;

        let nonce = VenmoAccountNonce::from_graphql(json).unwrap();

        assert_eq!(nonce.nonce, "fake-venmo-nonce");
        assert_eq!(nonce.username.as_deref(), Some("venmojoe"));
    }

    #[test]
    fn test_from_graphql_without_username() {
        let json = r#"{ "data": { "node": { "paymentMethodId": "fake-venmo-nonce" } } }"#;

        let nonce = VenmoAccountNonce::from_graphql(json).unwrap();

        assert_eq!(nonce.nonce, "fake-venmo-nonce");
        assert!(nonce.username.is_none());
    }

    #[test]
    fn test_from_graphql_without_payment_method() {
        let json = r#"{ "data": { "node": {} } }"#;

        assert!(VenmoAccountNonce::from_graphql(json).is_err());
    }

    #[test]
    fn test_from_graphql_invalid_json() {
        assert!(VenmoAccountNonce::from_graphql("invalid-response").is_err());
    }
}
