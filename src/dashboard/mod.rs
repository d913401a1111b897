pub mod client;
pub mod convert;
pub mod currencies;
pub mod render;
pub mod snapshot;
pub mod state;
pub mod timeago;

use anyhow::Result;
use chrono::Utc;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

use crate::dashboard::client::RelayClient;
use crate::dashboard::render::RandomVariation;
use crate::dashboard::state::{Board, Intent};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Fetches both regions from the relay and renders the board once. Each
/// region fails independently into its fixed notice.
pub async fn run_board(relay_url: &str) -> Result<()> {
    let client = RelayClient::new(relay_url)?;
    let mut board = Board::new();

    let pb = spinner("Fetching news and rates...");
    let seq = board.begin_rates_request();
    let (news, rates) = futures::join!(client.fetch_news(), client.fetch_rates(seq));
    pb.finish_and_clear();

    match news {
        Ok(articles) => board.apply(Intent::NewsLoaded(articles)),
        Err(e) => {
            error!(error = %e, "News fetch failed");
            board.apply(Intent::NewsFailed);
        }
    }
    match rates {
        Ok(snapshot) => board.apply(Intent::RatesLoaded(snapshot)),
        Err(e) => {
            error!(error = %e, "Rates fetch failed");
            board.apply(Intent::RatesFailed);
        }
    }

    let mut variation = RandomVariation;
    println!("{}", render::board_view(&board, Utc::now(), &mut variation));
    Ok(())
}

/// One-shot converter: fetch rates, apply the selection intents, print the
/// result or the placeholder.
pub async fn run_convert(
    relay_url: &str,
    amount: String,
    from: String,
    to: String,
    swap: bool,
) -> Result<()> {
    let client = RelayClient::new(relay_url)?;
    let mut board = Board::new();

    let pb = spinner("Fetching rates...");
    let seq = board.begin_rates_request();
    let rates = client.fetch_rates(seq).await;
    pb.finish_and_clear();

    match rates {
        Ok(snapshot) => board.apply(Intent::RatesLoaded(snapshot)),
        Err(e) => {
            error!(error = %e, "Rates fetch failed");
            board.apply(Intent::RatesFailed);
        }
    }

    // Selection intents come after the load: a rates refresh resets the
    // selects to their defaults.
    board.apply(Intent::SetAmount(amount));
    board.apply(Intent::SelectFrom(from.to_uppercase()));
    board.apply(Intent::SelectTo(to.to_uppercase()));
    if swap {
        board.apply(Intent::Swap);
    }

    if let Some(notice) = board.rates_notice {
        eprintln!("{}", style(notice).red());
    }
    println!("{}", render::converter_line(&board));
    Ok(())
}
