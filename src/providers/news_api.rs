use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::news_provider::NewsProvider;

/// NewsAPI.org top-headlines client. The API key stays server-side; callers
/// only ever see the JSON body.
pub struct NewsApiProvider {
    base_url: String,
    api_key: String,
}

impl NewsApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        NewsApiProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    #[instrument(name = "NewsFetch", skip(self))]
    async fn fetch_headlines(&self) -> Result<serde_json::Value> {
        let url = format!(
            "{}/v2/top-headlines?country=us&category=business&apiKey={}",
            self.base_url, self.api_key
        );
        // The key is a query parameter; keep it out of the logs.
        debug!("Requesting headlines from {}/v2/top-headlines", self.base_url);

        let client = reqwest::Client::builder().user_agent("fxdash/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {e} for news headlines"))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from news upstream",
                response.status()
            ));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| anyhow!("Failed to parse news response: {e}"))?;
        Ok(body)
    }
}
