use anyhow::{Context, Result};
use serde_json::{json, Value};

use super::types::{VaultedVenmoAccount, VenmoAccountNonce};
use crate::state::http::HttpClient;

const CREATE_PAYMENT_CONTEXT_MUTATION: &str = "mutation CreateVenmoPaymentContext($input: CreateVenmoPaymentContextInput!) { createVenmoPaymentContext(input: $input) { venmoPaymentContext { id } } }";

const PAYMENT_CONTEXT_QUERY: &str = "query PaymentContext($id: ID!) { node(id: $id) { ... on VenmoPaymentContext { paymentMethodId userName } } }";

pub async fn create_payment_context(
    http: &HttpClient,
    profile_id: Option<&str>,
) -> Result<String> {
    let body = json!({
        "query": CREATE_PAYMENT_CONTEXT_MUTATION,
        "variables": {
            "input": {
                "paymentMethodUsage": "SINGLE_USE",
                "merchantProfileId": profile_id,
                "intent": "CONTINUE",
            }
        }
    });

    let response = http.graphql(body).await?;

    let value: Value =
        serde_json::from_str(&response).context("Invalid payment context response")?;

    let id = value
        .pointer("/data/createVenmoPaymentContext/venmoPaymentContext/id")
        .and_then(Value::as_str)
        .context("Gateway did not return a payment context")?;

    Ok(id.to_string())
}

pub async fn nonce_from_payment_context(
    http: &HttpClient,
    context_id: &str,
) -> Result<VenmoAccountNonce> {
    let body = json!({
        "query": PAYMENT_CONTEXT_QUERY,
        "variables": { "id": context_id }
    });

    let response = http.graphql(body).await?;

    VenmoAccountNonce::from_graphql(&response)
}

pub async fn vault_venmo_account(
    http: &HttpClient,
    nonce: &str,
) -> Result<VaultedVenmoAccount> {
    let body = json!({ "venmoAccount": { "nonce": nonce } });

    http.request::<VaultedVenmoAccount>(
        "POST",
        "/v1/payment_methods/venmo_accounts",
        Some((body.to_string().into(), "application/json")),
    )
    .await?
    .ok_or_else(|| anyhow::anyhow!("Error while parsing response"))
}
