use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::dashboard::currencies::BASE_CURRENCY;
use crate::rate_provider::RateProvider;

/// ExchangeRate-API client fetching the full `latest/<base>` table. The key
/// is a path segment of the upstream URL and never leaves the server.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_latest(&self) -> Result<serde_json::Value> {
        let url = format!(
            "{}/v6/{}/latest/{}",
            self.base_url, self.api_key, BASE_CURRENCY
        );
        debug!("Requesting latest {BASE_CURRENCY} rates");

        let client = reqwest::Client::builder().user_agent("fxdash/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {e} for exchange rates"))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from exchange upstream",
                response.status()
            ));
        }

        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse exchange response: {e}"))?;
        Ok(body)
    }
}
