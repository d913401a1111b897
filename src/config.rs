use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::debug;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_EXCHANGE_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Relay configuration, read from the process environment. A `.env` file in
/// the working directory is honored.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub listen_addr: SocketAddr,
    pub static_dir: String,
    pub news_api_key: String,
    pub exchange_api_key: String,
    pub news_base_url: String,
    pub exchange_base_url: String,
}

impl RelayConfig {
    /// Loads the configuration. Both upstream keys are required; a missing
    /// key is a startup error, never a degraded server.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let news_api_key = get("NEWS_API_KEY")
            .context("NEWS_API_KEY is not set; the relay cannot start without it")?;
        let exchange_api_key = get("EXCHANGE_RATE_API_KEY")
            .context("EXCHANGE_RATE_API_KEY is not set; the relay cannot start without it")?;

        let port: u16 = match get("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let static_dir = get("FXDASH_STATIC_DIR").unwrap_or_else(|| "static".to_string());

        // Overridable so tests can point the relay at mock upstreams.
        let news_base_url =
            get("FXDASH_NEWS_BASE_URL").unwrap_or_else(|| DEFAULT_NEWS_BASE_URL.to_string());
        let exchange_base_url = get("FXDASH_EXCHANGE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_EXCHANGE_BASE_URL.to_string());

        debug!("Loaded relay configuration");
        Ok(RelayConfig {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            static_dir,
            news_api_key,
            exchange_api_key,
            news_base_url,
            exchange_base_url,
        })
    }
}
