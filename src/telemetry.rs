// src/telemetry.rs

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Fire-and-forget delivery of win notifications and tracking pixels.
/// Implementations must swallow transport failures: nothing in the bidding
/// path may fail because a beacon did.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// POSTs a JSON body with `Authorization: Bearer <bearer>`.
    async fn post_json(&self, url: &str, body: Value, bearer: &str);
    /// GETs a passive image beacon.
    async fn fire_pixel(&self, url: &str);
}

/// Production sink backed by a shared reqwest client. Failures are logged at
/// debug level and dropped; no retry, no acknowledgment.
#[derive(Clone)]
pub struct HttpTelemetrySink {
    client: Client,
}

impl HttpTelemetrySink {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTelemetrySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TelemetrySink for HttpTelemetrySink {
    async fn post_json(&self, url: &str, body: Value, bearer: &str) {
        let result = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", bearer))
            .json(&body)
            .send()
            .await;
        if let Err(err) = result {
            debug!("win notification to {} dropped: {}", url, err);
        }
    }

    async fn fire_pixel(&self, url: &str) {
        if let Err(err) = self.client.get(url).send().await {
            debug!("tracking pixel {} dropped: {}", url, err);
        }
    }
}
