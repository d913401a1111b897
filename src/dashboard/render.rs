//! Terminal rendering of the three board regions. Pure over the board state,
//! a clock value, and an injected variation source.

use chrono::{DateTime, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use crate::dashboard::convert::{Conversion, PLACEHOLDER};
use crate::dashboard::currencies::{self, BASE_CURRENCY, MAIN_CURRENCIES};
use crate::dashboard::state::Board;
use crate::dashboard::timeago::time_ago;

/// Articles rendered per refresh; the rest of the batch is discarded.
pub const MAX_ARTICLES: usize = 10;

/// Source of the per-row variation shown in the quotes table.
///
/// The value is synthetic: uniformly random in [-0.1, 0.1], regenerated on
/// every render, unrelated to any real price history. It exists only so the
/// table does not look frozen.
pub trait VariationSource {
    fn variation(&mut self) -> f64;
}

/// Thread-rng implementation used by the CLI.
pub struct RandomVariation;

impl VariationSource for RandomVariation {
    fn variation(&mut self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen_range(-0.1..=0.1)
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn variation_cell(variation: f64) -> Cell {
    let (icon, color) = if variation >= 0.0 {
        ("▲", Color::Green)
    } else {
        ("▼", Color::Red)
    };
    Cell::new(format!("{icon} {:.2}%", variation.abs()))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// The news region: title, source, relative age and link per article, capped
/// at [`MAX_ARTICLES`].
pub fn news_list(board: &Board, now: DateTime<Utc>) -> String {
    if let Some(notice) = board.news_notice {
        return style(notice).red().to_string();
    }

    let mut out = String::new();
    for article in board.articles.iter().take(MAX_ARTICLES) {
        out.push_str(&format!(
            "{}\n  {} · {}\n  {}\n",
            style(&article.title).bold(),
            article.source.name,
            time_ago(article.published_at, now),
            style(&article.url).dim(),
        ));
    }
    out
}

/// The quotes region: one row per main currency (base excluded) present in
/// both the snapshot and the descriptor table.
pub fn quotes_table(board: &Board, variation: &mut dyn VariationSource) -> String {
    if let Some(notice) = board.rates_notice {
        return style(notice).red().to_string();
    }
    let Some(snapshot) = &board.snapshot else {
        return style("No rates loaded.").dim().to_string();
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Currency"),
        header_cell(&format!("Rate ({BASE_CURRENCY})")),
        header_cell("Variation"),
    ]);

    for code in MAIN_CURRENCIES.iter().filter(|c| **c != BASE_CURRENCY) {
        let (Some(rate), Some(details)) = (snapshot.rate(code), currencies::descriptor(code))
        else {
            continue;
        };
        table.add_row(vec![
            Cell::new(format!(
                "{} {}\n{}",
                currencies::flag(details.territory),
                code,
                details.name
            )),
            Cell::new(format!("{rate:.4}")).set_alignment(CellAlignment::Right),
            variation_cell(variation.variation()),
        ]);
    }

    table.to_string()
}

/// The converter region: the selectable codes and the current result.
pub fn converter_line(board: &Board) -> String {
    let conversion = board
        .snapshot
        .as_ref()
        .and_then(|s| Conversion::compute(&board.amount, &board.from, &board.to, s));

    match conversion {
        Some(c) => format!(
            "{} {}",
            style(c.display_label()).bold(),
            style(c.display_value()).green().bold()
        ),
        None => format!(
            "{} {} = {}",
            board.amount,
            board.from,
            style(PLACEHOLDER).dim()
        ),
    }
}

/// All three regions, stacked the way the page lays them out.
pub fn board_view(board: &Board, now: DateTime<Utc>, variation: &mut dyn VariationSource) -> String {
    format!(
        "{}\n{}\n{}\n{}\n\n{}\n{}\n{}\n",
        style("Business News").bold().underlined(),
        news_list(board, now),
        style("Exchange Rates").bold().underlined(),
        quotes_table(board, variation),
        style("Converter").bold().underlined(),
        style(format!("Currencies: {}", MAIN_CURRENCIES.join(", "))).dim(),
        converter_line(board),
    )
}
