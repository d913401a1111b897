//! Upstream headline source for the relay.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetches the latest business headlines as the raw upstream JSON body.
    async fn fetch_headlines(&self) -> Result<serde_json::Value>;
}
