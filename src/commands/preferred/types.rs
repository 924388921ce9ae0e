use serde_json::Value;

/// Payment methods the user is likely to prefer: PayPal preference comes
/// from the gateway, Venmo preference from local app presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredPaymentMethodsResult {
    paypal_preferred: bool,
    venmo_preferred: bool,
}

impl PreferredPaymentMethodsResult {
    /// Builds a result from the raw gateway response. The payload is
    /// untrusted, anything unparsable degrades to "not preferred" instead
    /// of surfacing an error.
    pub fn from_json(json: &str, venmo_installed: bool) -> Self {
        let paypal_preferred = match serde_json::from_str::<Value>(json) {
            Ok(value) => value
                .pointer("/data/preferredPaymentMethods/paypalPreferred")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
            Err(_) => false,
        };

        Self {
            paypal_preferred,
            venmo_preferred: venmo_installed,
        }
    }

    pub fn paypal_preferred(&self) -> bool {
        self.paypal_preferred
    }

    pub fn venmo_preferred(&self) -> bool {
        self.venmo_preferred
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_paypal_preferred_when_gateway_says_so() {
        let json = r#"{
            "data": {
                "preferredPaymentMethods": {
                    "paypalPreferred": true
                }
            }
        }"#;

        let result = PreferredPaymentMethodsResult::from_json(json, false);

        assert!(result.paypal_preferred());
    }

    #[test]
    fn test_paypal_not_preferred_when_gateway_says_not() {
        let json = r#"{
            "data": {
                "preferredPaymentMethods": {
                    "paypalPreferred": false
                }
            }
        }"#;

        let result = PreferredPaymentMethodsResult::from_json(json, false);

        assert!(!result.paypal_preferred());
    }

    #[test]
    fn test_venmo_preferred_when_app_installed() {
        let result = PreferredPaymentMethodsResult::from_json("json", true);

        assert!(result.venmo_preferred());
    }

    #[test]
    fn test_venmo_not_preferred_when_app_not_installed() {
        let result = PreferredPaymentMethodsResult::from_json("json", false);

        assert!(!result.venmo_preferred());
    }

    #[test]
    fn test_invalid_json_defaults_to_not_preferred() {
        let result = PreferredPaymentMethodsResult::from_json("invalid-response", false);

        assert!(!result.paypal_preferred());
        assert!(!result.venmo_preferred());
    }

    #[test]
    fn test_non_boolean_leaf_defaults_to_not_preferred() {
        let json = r#"{
            "data": {
                "preferredPaymentMethods": {
                    "paypalPreferred": "yes"
                }
            }
        }"#;

        let result = PreferredPaymentMethodsResult::from_json(json, false);

        assert!(!result.paypal_preferred());
    }

    #[test]
    fn test_missing_leaf_defaults_to_not_preferred() {
        let json = r#"{ "data": { "preferredPaymentMethods": {} } }"#;

        let result = PreferredPaymentMethodsResult::from_json(json, true);

        assert!(!result.paypal_preferred());
        assert!(result.venmo_preferred());
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let json = r#"{
            "data": {
                "preferredPaymentMethods": {
                    "paypalPreferred": true
                }
            }
        }"#;

        let first = PreferredPaymentMethodsResult::from_json(json, true);
        let second = PreferredPaymentMethodsResult::from_json(json, true);

        assert_eq!(first, second);
        assert_eq!(first.paypal_preferred(), second.paypal_preferred());
        assert_eq!(first.venmo_preferred(), second.venmo_preferred());
    }
}
