//! Handler for the `serve` command.

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::ArbitrageScanner;
use crate::web;

/// Start the web dashboard and block until shutdown.
pub async fn execute(config: &Config) -> Result<()> {
    let scanner = ArbitrageScanner::from_config(config)?;
    info!(
        bind = %config.server.bind,
        sources = ?scanner.source_names(),
        "Starting web dashboard"
    );
    web::serve(&config.server.bind, scanner).await
}
