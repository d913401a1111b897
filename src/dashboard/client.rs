//! HTTP client for the relay endpoints. One request per region, no retry: a
//! region either loads fully or fails into its fixed notice.

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::dashboard::snapshot::RateSnapshot;
use crate::dashboard::state::NewsArticle;

pub struct RelayClient {
    base_url: String,
    client: reqwest::Client,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(RelayClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder().user_agent("fxdash/0.1").build()?,
        })
    }

    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {e} for {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for {url}", response.status()));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| anyhow!("Failed to parse response from {url}: {e}"))?;
        Ok(body)
    }

    pub async fn fetch_news(&self) -> Result<Vec<NewsArticle>> {
        let body = self.get_json("/api/news").await?;
        NewsArticle::batch_from_value(&body)
    }

    /// `seq` is the board-issued request sequence; it travels with the
    /// snapshot so stale results lose to newer ones.
    pub async fn fetch_rates(&self, seq: u64) -> Result<RateSnapshot> {
        let body = self.get_json("/api/exchange").await?;
        RateSnapshot::from_value(seq, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_relay(endpoint: &str, response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_fetch_news() {
        let body = r#"{
            "status": "ok",
            "articles": [{
                "source": { "id": null, "name": "Example Wire" },
                "title": "Markets rally",
                "publishedAt": "2024-05-01T09:30:00Z",
                "url": "https://example.com/markets"
            }]
        }"#;
        let mock_server =
            mock_relay("/api/news", ResponseTemplate::new(200).set_body_string(body)).await;

        let client = RelayClient::new(&mock_server.uri()).unwrap();
        let articles = client.fetch_news().await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Markets rally");
    }

    #[tokio::test]
    async fn test_fetch_news_error_status() {
        let mock_server = mock_relay(
            "/api/news",
            ResponseTemplate::new(500).set_body_string(r#"{"message":"Failed to fetch news."}"#),
        )
        .await;

        let client = RelayClient::new(&mock_server.uri()).unwrap();
        let result = client.fetch_news().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("HTTP error:"));
    }

    #[tokio::test]
    async fn test_fetch_rates_carries_sequence() {
        let body = r#"{ "conversion_rates": { "USD": 1.0, "BRL": 5.4321 } }"#;
        let mock_server = mock_relay(
            "/api/exchange",
            ResponseTemplate::new(200).set_body_string(body),
        )
        .await;

        let client = RelayClient::new(&mock_server.uri()).unwrap();
        let snapshot = client.fetch_rates(3).await.unwrap();

        assert_eq!(snapshot.seq, 3);
        assert_eq!(snapshot.rate("BRL"), Some(5.4321));
    }

    #[tokio::test]
    async fn test_fetch_rates_without_mapping_fails() {
        let mock_server = mock_relay(
            "/api/exchange",
            ResponseTemplate::new(200).set_body_string(r#"{ "result": "success" }"#),
        )
        .await;

        let client = RelayClient::new(&mock_server.uri()).unwrap();
        let result = client.fetch_rates(1).await;

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("conversion_rates")
        );
    }
}
