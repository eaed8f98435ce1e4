//! Handler for the `scan` command.

use crate::cli::{output, ScanArgs};
use crate::config::Config;
use crate::error::Result;
use crate::scanner::ArbitrageScanner;

/// Run one scan and print the result to stdout.
pub async fn execute(config: &Config, args: &ScanArgs) -> Result<()> {
    let scanner = ArbitrageScanner::from_config(config)?;
    let opportunities = scanner.scan(&args.event, args.state.as_ref()).await;

    let rendered = if args.json {
        output::render_json(&opportunities)?
    } else {
        output::render_text(&opportunities)
    };
    println!("{rendered}");

    Ok(())
}
