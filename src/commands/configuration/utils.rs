use std::io::Write;

use anyhow::Result;
use chrono::Utc;
use tabwriter::TabWriter;

use crate::state::http::HttpClient;
use crate::store::configuration::{CachedConfiguration, Configuration, ConfigurationCache};
use crate::store::Store;
use crate::utils::relative_time;

pub async fn fetch_configuration(http: &HttpClient) -> Result<Configuration> {
    let configuration = http
        .request::<Configuration>("GET", "/v1/configuration", None)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Error while parsing response"))?;

    Ok(configuration)
}

/// Cached configuration for the key, refetched when stale or on `refresh`.
pub async fn get_configuration(
    http: &HttpClient,
    token: &str,
    refresh: bool,
) -> Result<CachedConfiguration> {
    let mut cache = ConfigurationCache::new().await?;
    let now = Utc::now();

    if !refresh {
        if let Some(cached) = cache.get(token, now) {
            log::debug!("Using cached configuration from {}", cached.fetched_at);

            return Ok(cached.clone());
        }
    }

    let configuration = fetch_configuration(http).await?;

    cache.put(token, configuration.clone(), now);
    cache.save().await?;

    Ok(CachedConfiguration {
        configuration,
        fetched_at: now,
    })
}

pub fn format_configuration(cached: &CachedConfiguration) -> Result<Vec<String>> {
    let configuration = &cached.configuration;

    let mut tw = TabWriter::new(vec![]);

    writeln!(&mut tw, "MERCHANT\t{}", configuration.merchant_id)?;
    writeln!(&mut tw, "ENVIRONMENT\t{}", configuration.environment)?;
    writeln!(
        &mut tw,
        "VENMO\t{}",
        if configuration.is_venmo_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    )?;
    writeln!(
        &mut tw,
        "PAYPAL\t{}",
        if configuration.is_paypal_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    )?;
    writeln!(
        &mut tw,
        "FETCHED\t{} ago",
        relative_time(cached.fetched_at)
    )?;

    let out = String::from_utf8(tw.into_inner().unwrap())?
        .lines()
        .map(std::string::ToString::to_string)
        .collect();

    Ok(out)
}
