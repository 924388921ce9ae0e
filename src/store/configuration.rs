use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Storable;
use crate::config::{CONFIGURATION_CACHE_TTL_MS, CONFIGURATION_STORE_PATH};
use crate::impl_store;

/// Gateway configuration for a merchant account.
///
/// The gateway adds fields over time, unknown ones are ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub merchant_id: String,
    pub environment: String,
    pub venmo: Option<VenmoConfiguration>,
    pub paypal: Option<PayPalConfiguration>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenmoConfiguration {
    pub enabled: bool,
    pub merchant_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: Option<String>,
    pub enriched_customer_data_enabled: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayPalConfiguration {
    pub enabled: bool,
    pub display_name: Option<String>,
}

impl Configuration {
    pub fn is_venmo_enabled(&self) -> bool {
        self.venmo.as_ref().map_or(false, |venmo| venmo.enabled)
    }

    pub fn is_paypal_enabled(&self) -> bool {
        self.paypal.as_ref().map_or(false, |paypal| paypal.enabled)
    }

    pub fn venmo_merchant_id(&self) -> Option<String> {
        self.venmo
            .as_ref()
            .and_then(|venmo| venmo.merchant_id.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedConfiguration {
    pub configuration: Configuration,
    pub fetched_at: DateTime<Utc>,
}

/// Persisted configuration cache, keyed by tokenization key.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ConfigurationCache {
    pub entries: HashMap<String, CachedConfiguration>,
}

/// An entry aged exactly the TTL is already stale.
pub fn is_stale(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - fetched_at >= Duration::milliseconds(CONFIGURATION_CACHE_TTL_MS)
}

impl ConfigurationCache {
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&CachedConfiguration> {
        self.entries
            .get(key)
            .filter(|cached| !is_stale(cached.fetched_at, now))
    }

    pub fn put(&mut self, key: &str, configuration: Configuration, now: DateTime<Utc>) {
        self.entries.insert(
            key.to_string(),
            CachedConfiguration {
                configuration,
                fetched_at: now,
            },
        );
    }
}

impl Storable for ConfigurationCache {
    fn path() -> Result<PathBuf> {
        home_path(CONFIGURATION_STORE_PATH)
    }
}

impl_store!(ConfigurationCache);

#[cfg(test)]
mod test {
    use super::*;

    fn cache_with_entry(fetched_at: DateTime<Utc>) -> ConfigurationCache {
        let mut cache = ConfigurationCache::default();
        cache.put("sandbox_abc123_merchant", Configuration::default(), fetched_at);
        cache
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let fetched_at = Utc::now();
        let cache = cache_with_entry(fetched_at);

        let now = fetched_at + Duration::milliseconds(CONFIGURATION_CACHE_TTL_MS - 1);

        assert!(cache.get("sandbox_abc123_merchant", now).is_some());
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let fetched_at = Utc::now();
        let cache = cache_with_entry(fetched_at);

        let now = fetched_at + Duration::milliseconds(CONFIGURATION_CACHE_TTL_MS);

        assert!(cache.get("sandbox_abc123_merchant", now).is_none());
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let cache = cache_with_entry(Utc::now());

        assert!(cache.get("production_other_key", Utc::now()).is_none());
    }

    #[test]
    fn test_configuration_tolerates_missing_blocks() {
        let configuration: Configuration = serde_json::from_str(
            r#"{ "merchantId": "merchant_id", "environment": "sandbox" }"#,
        )
        .unwrap();

        assert_eq!(configuration.merchant_id, "merchant_id");
        assert!(!configuration.is_venmo_enabled());
        assert!(!configuration.is_paypal_enabled());
        assert!(configuration.venmo_merchant_id().is_none());
    }

    #[test]
    fn test_configuration_reads_gateway_field_names() {
        let configuration: Configuration = serde_json::from_str(
            r#"{
                "merchantId": "merchant_id",
                "environment": "sandbox",
                "venmo": {
                    "enabled": true,
                    "merchantId": "venmo-merchant",
                    "accessToken": "access-token",
                    "environment": "sandbox",
                    "enrichedCustomerDataEnabled": true
                },
                "paypal": { "enabled": true, "displayName": "ACME" }
            }"#,
        )
        .unwrap();

        assert!(configuration.is_venmo_enabled());
        assert!(configuration.is_paypal_enabled());
        assert_eq!(
            configuration.venmo_merchant_id().as_deref(),
            Some("venmo-merchant")
        );
    }
}
