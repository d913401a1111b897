pub mod config;
pub mod dashboard;
pub mod log;
pub mod news_provider;
pub mod providers;
pub mod rate_provider;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::RelayConfig;
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;
use crate::providers::news_api::NewsApiProvider;
use crate::server::AppState;

pub enum AppCommand {
    Serve,
    Board {
        relay_url: String,
    },
    Convert {
        relay_url: String,
        amount: String,
        from: String,
        to: String,
        swap: bool,
    },
}

pub async fn run_command(command: AppCommand) -> Result<()> {
    match command {
        AppCommand::Serve => serve().await,
        AppCommand::Board { relay_url } => dashboard::run_board(&relay_url).await,
        AppCommand::Convert {
            relay_url,
            amount,
            from,
            to,
            swap,
        } => dashboard::run_convert(&relay_url, amount, from, to, swap).await,
    }
}

async fn serve() -> Result<()> {
    info!("Relay starting...");

    // Refuses to start without both upstream credentials.
    let config = RelayConfig::from_env()?;

    let state = Arc::new(AppState {
        news: Arc::new(NewsApiProvider::new(
            &config.news_base_url,
            &config.news_api_key,
        )),
        rates: Arc::new(ExchangeRateApiProvider::new(
            &config.exchange_base_url,
            &config.exchange_api_key,
        )),
    });

    server::run(config, state).await
}
