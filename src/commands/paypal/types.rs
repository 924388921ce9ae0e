use anyhow::{Context, Result};
use serde_json::Value;

/// A PayPal payment resource. The gateway answers checkout creation with a
/// `paymentResource` object and billing agreement setup with an
/// `agreementSetup` object, both of which boil down to an approval URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalPaymentResource {
    pub redirect_url: String,
}

impl PayPalPaymentResource {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).context("Invalid payment resource response")?;

        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let redirect_url = value
            .pointer("/paymentResource/redirectUrl")
            .or_else(|| value.pointer("/agreementSetup/approvalUrl"))
            .and_then(Value::as_str)
            .context("Payment resource has no approval URL")?;

        Ok(Self {
            redirect_url: redirect_url.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_json_payment_resource() {
        let json = r#"{
            "paymentResource": {
                "redirectUrl": "https://checkout.example.com/approve?token=EC-123"
            }
        }"#;

        let resource = PayPalPaymentResource::from_json(json).unwrap();

        assert_eq!(
            resource.redirect_url,
            "https://checkout.example.com/approve?token=EC-123"
        );
    }

    #[test]
    fn test_from_json_agreement_setup() {
        let json = r#"{
            "agreementSetup": {
                "approvalUrl": "https://checkout.example.com/agreement?ba_token=BA-123"
            }
        }"#;

        let resource = PayPalPaymentResource::from_json(json).unwrap();

        assert_eq!(
            resource.redirect_url,
            "https://checkout.example.com/agreement?ba_token=BA-123"
        );
    }

    #[test]
    fn test_payment_resource_wins_over_agreement_setup() {
        let json = r#"{
            "paymentResource": { "redirectUrl": "https://checkout.example.com/one-time" },
            "agreementSetup": { "approvalUrl": "https://checkout.example.com/agreement" }
        }"#;

        let resource = PayPalPaymentResource::from_json(json).unwrap();

        assert_eq!(resource.redirect_url, "https://checkout.example.com/one-time");
    }

    #[test]
    fn test_from_json_without_approval_url() {
        assert!(PayPalPaymentResource::from_json("{}").is_err());
        assert!(PayPalPaymentResource::from_json("invalid-response").is_err());
    }
}
