use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Postal address as the gateway expects it, used for shipping overrides.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_alpha2: Option<String>,
}

impl PostalAddress {
    /// An address without a country code is treated as not provided.
    pub fn is_empty(&self) -> bool {
        self.country_code_alpha2
            .as_deref()
            .map_or(true, |code| code.is_empty())
    }
}

impl Display for PostalAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let get = |field: &Option<String>| field.clone().unwrap_or_default();

        write!(
            f,
            "{}\n{}\n{}\n{}, {}\n{} {}",
            get(&self.recipient_name),
            get(&self.street_address),
            get(&self.extended_address),
            get(&self.locality),
            get(&self.region),
            get(&self.postal_code),
            get(&self.country_code_alpha2),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(PostalAddress::default().is_empty());

        let mut address = PostalAddress {
            street_address: Some("123 Fake St".to_string()),
            ..Default::default()
        };
        assert!(address.is_empty());

        address.country_code_alpha2 = Some("US".to_string());
        assert!(!address.is_empty());
    }

    #[test]
    fn test_serializes_with_gateway_field_names() {
        let address = PostalAddress {
            street_address: Some("123 Fake St".to_string()),
            country_code_alpha2: Some("US".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&address).unwrap();

        assert_eq!(json["streetAddress"], "123 Fake St");
        assert_eq!(json["countryCodeAlpha2"], "US");
        assert!(json.get("recipientName").is_none());
    }

    #[test]
    fn test_display() {
        let address = PostalAddress {
            recipient_name: Some("Jane Doe".to_string()),
            street_address: Some("123 Fake St".to_string()),
            locality: Some("Chicago".to_string()),
            region: Some("IL".to_string()),
            postal_code: Some("60606".to_string()),
            country_code_alpha2: Some("US".to_string()),
            ..Default::default()
        };

        assert_eq!(
            address.to_string(),
            "Jane Doe\n123 Fake St\n\nChicago, IL\n60606 US"
        );
    }
}
