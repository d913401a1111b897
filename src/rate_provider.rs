//! Upstream exchange-rate source for the relay.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches all rates relative to the base currency as the raw upstream
    /// JSON body.
    async fn fetch_latest(&self) -> Result<serde_json::Value>;
}
