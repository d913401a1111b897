//! The converter: a pure cross-rate computation over the current snapshot,
//! re-run synchronously on every input change.

use crate::dashboard::snapshot::RateSnapshot;

/// Shown whenever the amount or either currency cannot produce a result.
pub const PLACEHOLDER: &str = "—";

/// One computed conversion, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl Conversion {
    /// `amount` is the raw input text. A non-finite parse or a currency
    /// missing from the snapshot yields no conversion.
    pub fn compute(
        amount: &str,
        from: &str,
        to: &str,
        snapshot: &RateSnapshot,
    ) -> Option<Conversion> {
        let amount: f64 = amount.trim().parse().ok().filter(|a: &f64| a.is_finite())?;
        let rate = snapshot.cross_rate(from, to)?;
        Some(Conversion {
            amount,
            from: from.to_string(),
            to: to.to_string(),
            value: amount * rate,
        })
    }

    /// "105.2754 BRL", four decimal places, as the board displays it.
    pub fn display_value(&self) -> String {
        format!("{:.4} {}", self.value, self.to)
    }

    /// "100 USD =", the label shown next to the value.
    pub fn display_label(&self) -> String {
        format!("{} {} =", self.amount, self.from)
    }
}

/// Display-side entry point: always returns something printable.
pub fn convert_or_placeholder(amount: &str, from: &str, to: &str, snapshot: &RateSnapshot) -> String {
    Conversion::compute(amount, from, to, snapshot)
        .map(|c| c.display_value())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
