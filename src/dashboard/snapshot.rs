use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The complete set of rates held in memory at a given time, all relative to
/// the base currency. Replaced wholesale on every successful fetch; never
/// merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSnapshot {
    /// Fetch sequence that produced this snapshot. Newer requests win over
    /// older ones regardless of arrival order.
    pub seq: u64,
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct LatestRatesBody {
    conversion_rates: HashMap<String, f64>,
}

impl RateSnapshot {
    /// Builds a snapshot from the relay's `/api/exchange` body, which must
    /// carry a `conversion_rates` code→number mapping.
    pub fn from_value(seq: u64, body: &serde_json::Value) -> Result<Self> {
        let parsed: LatestRatesBody = serde_json::from_value(body.clone())
            .context("Exchange response is missing a conversion_rates mapping")?;
        Ok(RateSnapshot {
            seq,
            rates: parsed.conversion_rates,
        })
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Cross rate between two currencies via their base-relative rates, or
    /// `None` when either is absent from the snapshot.
    pub fn cross_rate(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.rate(to)? / self.rate(from)?)
    }
}

#[cfg(test)]
impl RateSnapshot {
    pub fn from_pairs(seq: u64, pairs: &[(&str, f64)]) -> Self {
        RateSnapshot {
            seq,
            rates: pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
        }
    }
}
