use anyhow::Result;
use serde_json::{json, Value};

use super::types::PayPalPaymentResource;
use crate::state::http::HttpClient;
use crate::types::PostalAddress;

pub struct PaymentResourceRequest<'a> {
    pub amount: &'a str,
    pub currency: &'a str,
    pub billing_agreement: bool,
    pub shipping: Option<&'a PostalAddress>,
}

pub async fn create_payment_resource(
    http: &HttpClient,
    request: &PaymentResourceRequest<'_>,
) -> Result<PayPalPaymentResource> {
    let path = if request.billing_agreement {
        "/v1/paypal_hermes/setup_billing_agreement"
    } else {
        "/v1/paypal_hermes/create_payment_resource"
    };

    let mut body = json!({
        "amount": request.amount,
        "currencyIsoCode": request.currency,
        "returnUrl": "quill://onetouch/v1/success",
        "cancelUrl": "quill://onetouch/v1/cancel",
    });

    if let Some(shipping) = request.shipping {
        body["shippingAddressOverride"] = serde_json::to_value(shipping)?;
    }

    let value = http
        .request::<Value>("POST", path, Some((body.to_string().into(), "application/json")))
        .await?
        .ok_or_else(|| anyhow::anyhow!("Error while parsing response"))?;

    PayPalPaymentResource::from_value(&value)
}
