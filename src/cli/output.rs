//! Terminal rendering for scan results.
//!
//! Text output is a headline followed by a table; JSON output is the bare
//! opportunity array. Color is applied only when stdout supports it, so
//! piped output stays plain.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::{format_usd, Opportunity};
use crate::error::Result;

/// Message printed when a scan yields nothing.
pub const NO_RESULTS: &str = "No profitable opportunities found for current filters.";

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Seats")]
    seats: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Buy")]
    buy: String,
    #[tabled(rename = "Sell")]
    sell: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

impl OpportunityRow {
    fn new(rank: usize, opp: &Opportunity) -> Self {
        Self {
            rank,
            event: opp.event_name().to_string(),
            location: format!("{}, {}", opp.city(), opp.region()),
            seats: format!("Sec {} Row {}", opp.section(), opp.row()),
            quantity: opp.quantity(),
            buy: format!("{} @ {}", opp.buy_source(), format_usd(opp.buy_price())),
            sell: format!("{} @ {}", opp.sell_source(), format_usd(opp.sell_price())),
            profit: format_usd(opp.estimated_profit()),
            roi: percent(opp),
        }
    }
}

fn percent(opp: &Opportunity) -> String {
    let pct = opp.roi() * rust_decimal::Decimal::ONE_HUNDRED;
    format!("{:.2}%", pct)
}

/// Format a value in green when stdout supports color.
pub fn positive(value: impl Display) -> String {
    value
        .to_string()
        .if_supports_color(Stream::Stdout, |v| v.green())
        .to_string()
}

/// Format a value dimmed when stdout supports color.
pub fn muted(value: impl Display) -> String {
    value
        .to_string()
        .if_supports_color(Stream::Stdout, |v| v.dimmed())
        .to_string()
}

/// Render opportunities as a headline plus table.
pub fn render_text(opportunities: &[Opportunity]) -> String {
    if opportunities.is_empty() {
        return NO_RESULTS.to_string();
    }

    let rows: Vec<_> = opportunities
        .iter()
        .enumerate()
        .map(|(i, opp)| OpportunityRow::new(i + 1, opp))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "{}\n{}",
        positive(format!("Found {} opportunity(s):", opportunities.len())),
        table
    )
}

/// Render opportunities as a pretty-printed JSON array.
pub fn render_json(opportunities: &[Opportunity]) -> Result<String> {
    Ok(serde_json::to_string_pretty(opportunities)?)
}
