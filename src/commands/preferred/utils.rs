use std::io::Write;

use anyhow::Result;
use serde_json::json;
use tabwriter::TabWriter;

use super::types::PreferredPaymentMethodsResult;
use crate::state::http::HttpClient;

pub const PREFERRED_PAYMENT_METHODS_QUERY: &str =
    "query PreferredPaymentMethods { preferredPaymentMethods { paypalPreferred } }";

/// Asks the gateway which payment methods the user prefers. The result
/// parser absorbs malformed payloads, so transport failures degrade to the
/// same safe defaults instead of aborting the command.
pub async fn fetch_preferred_payment_methods(
    http: &HttpClient,
    venmo_installed: bool,
) -> PreferredPaymentMethodsResult {
    let body = json!({ "query": PREFERRED_PAYMENT_METHODS_QUERY });

    match http.graphql(body).await {
        Ok(response) => PreferredPaymentMethodsResult::from_json(&response, venmo_installed),
        Err(error) => {
            log::debug!("Preferred payment methods query failed: {error}");

            PreferredPaymentMethodsResult::from_json("", venmo_installed)
        }
    }
}

pub fn format_preferred(result: &PreferredPaymentMethodsResult, title: bool) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "METHOD\tPREFERRED")?;
    }

    writeln!(&mut tw, "PayPal\t{}", result.paypal_preferred())?;
    writeln!(&mut tw, "Venmo\t{}", result.venmo_preferred())?;

    let out = String::from_utf8(tw.into_inner().unwrap())?
        .lines()
        .map(std::string::ToString::to_string)
        .collect();

    Ok(out)
}
