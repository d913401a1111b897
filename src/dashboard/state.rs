//! Explicit board state and the intents that update it. Renderers take the
//! state as input; nothing here touches the network or a terminal.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::dashboard::convert::{PLACEHOLDER, convert_or_placeholder};
use crate::dashboard::currencies::BASE_CURRENCY;
use crate::dashboard::snapshot::RateSnapshot;

pub const DEFAULT_TO_CURRENCY: &str = "BRL";
pub const NEWS_FAILURE_NOTICE: &str = "Could not load news.";
pub const RATES_FAILURE_NOTICE: &str = "Could not load exchange rates.";

/// One article as received from the relay. Read-only; never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub source: NewsSource,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsSource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct HeadlinesBody {
    articles: Vec<NewsArticle>,
}

impl NewsArticle {
    /// Extracts the article batch from the relay's `/api/news` body.
    pub fn batch_from_value(body: &serde_json::Value) -> Result<Vec<NewsArticle>> {
        let parsed: HeadlinesBody = serde_json::from_value(body.clone())
            .context("News response is missing an articles list")?;
        Ok(parsed.articles)
    }
}

/// A user action or fetch completion, consumed by [`Board::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetAmount(String),
    SelectFrom(String),
    SelectTo(String),
    Swap,
    RatesLoaded(RateSnapshot),
    RatesFailed,
    NewsLoaded(Vec<NewsArticle>),
    NewsFailed,
}

/// The whole dashboard state. Rebuilt in memory per process; nothing survives
/// an exit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub snapshot: Option<RateSnapshot>,
    pub articles: Vec<NewsArticle>,
    pub news_notice: Option<&'static str>,
    pub rates_notice: Option<&'static str>,
    pub amount: String,
    pub from: String,
    pub to: String,
    next_seq: u64,
}

impl Board {
    pub fn new() -> Self {
        Board {
            amount: "1".to_string(),
            from: BASE_CURRENCY.to_string(),
            to: DEFAULT_TO_CURRENCY.to_string(),
            ..Default::default()
        }
    }

    /// Issues the sequence number for the next rates request. Results carry
    /// it back so stale responses can be told apart from current ones.
    pub fn begin_rates_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SetAmount(amount) => self.amount = amount,
            Intent::SelectFrom(code) => self.from = code,
            Intent::SelectTo(code) => self.to = code,
            Intent::Swap => std::mem::swap(&mut self.from, &mut self.to),
            Intent::RatesLoaded(snapshot) => {
                // Last-requested-wins: a result from an older request than
                // the one already applied is discarded.
                if self
                    .snapshot
                    .as_ref()
                    .is_some_and(|current| snapshot.seq < current.seq)
                {
                    return;
                }
                self.snapshot = Some(snapshot);
                self.rates_notice = None;
                // Every successful refresh repopulates the selects and
                // discards the prior selection.
                self.from = BASE_CURRENCY.to_string();
                self.to = DEFAULT_TO_CURRENCY.to_string();
            }
            Intent::RatesFailed => self.rates_notice = Some(RATES_FAILURE_NOTICE),
            Intent::NewsLoaded(articles) => {
                self.articles = articles;
                self.news_notice = None;
            }
            Intent::NewsFailed => self.news_notice = Some(NEWS_FAILURE_NOTICE),
        }
    }

    /// Current converter output: a formatted value, or the placeholder when
    /// no snapshot is loaded or the inputs are invalid.
    pub fn conversion_display(&self) -> String {
        match &self.snapshot {
            Some(snapshot) => convert_or_placeholder(&self.amount, &self.from, &self.to, snapshot),
            None => PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded_board() -> Board {
        let mut board = Board::new();
        let seq = board.begin_rates_request();
        board.apply(Intent::RatesLoaded(RateSnapshot::from_pairs(
            seq,
            &[("USD", 1.0), ("EUR", 0.5), ("BRL", 5.0)],
        )));
        board
    }

    #[test]
    fn test_rates_loaded_resets_selection_to_defaults() {
        let mut board = Board::new();
        board.apply(Intent::SelectFrom("EUR".to_string()));
        board.apply(Intent::SelectTo("JPY".to_string()));

        let seq = board.begin_rates_request();
        board.apply(Intent::RatesLoaded(RateSnapshot::from_pairs(
            seq,
            &[("USD", 1.0), ("BRL", 5.0)],
        )));

        assert_eq!(board.from, "USD");
        assert_eq!(board.to, "BRL");
        assert!(board.rates_notice.is_none());
    }

    #[test]
    fn test_swap_twice_restores_selection_and_result() {
        let mut board = loaded_board();
        board.apply(Intent::SetAmount("100".to_string()));
        let before = board.conversion_display();
        assert_eq!(before, "500.0000 BRL");

        board.apply(Intent::Swap);
        assert_eq!(board.from, "BRL");
        assert_eq!(board.to, "USD");
        assert_eq!(board.conversion_display(), "20.0000 USD");

        board.apply(Intent::Swap);
        assert_eq!(board.from, "USD");
        assert_eq!(board.to, "BRL");
        assert_eq!(board.conversion_display(), before);
    }

    #[test]
    fn test_stale_rates_result_is_discarded() {
        let mut board = Board::new();
        let seq_first = board.begin_rates_request();
        let seq_second = board.begin_rates_request();

        // The later request resolves first.
        board.apply(Intent::RatesLoaded(RateSnapshot::from_pairs(
            seq_second,
            &[("USD", 1.0), ("BRL", 6.0)],
        )));
        // The older one straggles in afterwards and must not win.
        board.apply(Intent::RatesLoaded(RateSnapshot::from_pairs(
            seq_first,
            &[("USD", 1.0), ("BRL", 5.0)],
        )));

        assert_eq!(
            board.snapshot.as_ref().and_then(|s| s.rate("BRL")),
            Some(6.0)
        );
    }

    #[test]
    fn test_failure_notices_are_fixed_strings() {
        let mut board = Board::new();
        board.apply(Intent::NewsFailed);
        board.apply(Intent::RatesFailed);
        assert_eq!(board.news_notice, Some(NEWS_FAILURE_NOTICE));
        assert_eq!(board.rates_notice, Some(RATES_FAILURE_NOTICE));
    }

    #[test]
    fn test_successful_loads_clear_notices() {
        let mut board = Board::new();
        board.apply(Intent::NewsFailed);
        board.apply(Intent::RatesFailed);

        board.apply(Intent::NewsLoaded(vec![]));
        let seq = board.begin_rates_request();
        board.apply(Intent::RatesLoaded(RateSnapshot::from_pairs(
            seq,
            &[("USD", 1.0)],
        )));

        assert!(board.news_notice.is_none());
        assert!(board.rates_notice.is_none());
    }

    #[test]
    fn test_conversion_display_without_snapshot_is_placeholder() {
        let board = Board::new();
        assert_eq!(board.conversion_display(), PLACEHOLDER);
    }

    #[test]
    fn test_invalid_amount_is_placeholder() {
        let mut board = loaded_board();
        board.apply(Intent::SetAmount("not a number".to_string()));
        assert_eq!(board.conversion_display(), PLACEHOLDER);
    }

    #[test]
    fn test_article_batch_parsing() {
        let body = json!({
            "status": "ok",
            "articles": [{
                "source": { "id": null, "name": "Example Wire" },
                "title": "Markets rally",
                "publishedAt": "2024-05-01T09:30:00Z",
                "url": "https://example.com/markets"
            }]
        });

        let articles = NewsArticle::batch_from_value(&body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Markets rally");
        assert_eq!(articles[0].source.name, "Example Wire");

        let bad = json!({ "status": "error" });
        assert!(NewsArticle::batch_from_value(&bad).is_err());
    }
}
