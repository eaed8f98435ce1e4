//! Handler for the `sources` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::source::{ListingSource, SourceFactory};

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "Source")]
    name: String,
    #[tabled(rename = "Mode")]
    mode: &'static str,
}

impl SourceRow {
    fn new(source: &dyn ListingSource) -> Self {
        Self {
            name: source.name().to_string(),
            mode: if source.is_live() { "live" } else { "sample" },
        }
    }
}

/// Render the configured sources as a table.
pub fn render(sources: &[&dyn ListingSource]) -> String {
    let rows: Vec<_> = sources.iter().map(|s| SourceRow::new(*s)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// List configured sources and whether each queries a live upstream.
pub fn execute(config: &Config) -> Result<()> {
    let sources = SourceFactory::create_sources(&config.sources)?;
    let refs: Vec<&dyn ListingSource> = sources.iter().map(|s| s.as_ref()).collect();

    println!("{}", render(&refs));
    println!(
        "{}",
        output::muted("Set SEATGEEK_CLIENT_ID to query the SeatGeek API.")
    );
    Ok(())
}
