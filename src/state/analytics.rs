use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};

use super::http::HttpClient;

/// Reports a flow event to the gateway. Callers fire and forget, a lost
/// event is never worth failing a payment flow over.
pub async fn track(http: &HttpClient, event: &str) -> Result<()> {
    let body = json!({
        "analytics": [{
            "kind": event,
            "timestamp": Utc::now().timestamp_millis(),
        }]
    });

    log::debug!("analytics: {event}");

    http.request::<Value>(
        "POST",
        "/v1/analytics",
        Some((body.to_string().into(), "application/json")),
    )
    .await?;

    Ok(())
}
