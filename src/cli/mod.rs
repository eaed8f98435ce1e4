//! Command-line interface definitions.
//!
//! Defines the CLI structure for the ticketfinder application using `clap`
//! and dispatches each subcommand to its handler.

pub mod diagnostic;
pub mod output;
pub mod scan;
#[cfg(feature = "web")]
pub mod serve;
pub mod sources;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::Region;
use crate::error::Result;

/// Scan US ticket marketplaces for ticket arbitrage opportunities.
#[derive(Parser, Debug)]
#[command(name = "ticketfinder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan marketplaces for an event and print opportunities
    Scan(ScanArgs),

    /// Serve the web dashboard
    #[cfg(feature = "web")]
    Serve(ServeArgs),

    /// List the configured listing sources
    Sources,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Event search term (e.g. 'Taylor Swift')
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub event: String,

    /// Optional 2-letter state filter (e.g. NY)
    #[arg(long)]
    pub state: Option<Region>,

    /// Minimum projected profit in USD
    #[arg(long)]
    pub min_profit: Option<Decimal>,

    /// Minimum projected ROI as decimal
    #[arg(long)]
    pub min_roi: Option<Decimal>,

    /// Override buy-side fee rate
    #[arg(long)]
    pub buy_fee: Option<Decimal>,

    /// Override sell-side fee rate
    #[arg(long)]
    pub sell_fee: Option<Decimal>,

    /// Print machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Apply threshold and fee overrides to the scanner configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(min_profit) = self.min_profit {
            config.scanner.min_profit = min_profit;
        }
        if let Some(min_roi) = self.min_roi {
            config.scanner.min_roi = min_roi;
        }
        if let Some(buy_fee) = self.buy_fee {
            config.scanner.buy_fee_rate = buy_fee;
        }
        if let Some(sell_fee) = self.sell_fee {
            config.scanner.sell_fee_rate = sell_fee;
        }
    }
}

/// Arguments for the `serve` subcommand.
#[cfg(feature = "web")]
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Override listen address (e.g. 127.0.0.1:8000)
    #[arg(long)]
    pub bind: Option<String>,
}

impl Cli {
    /// Load the configuration file, or defaults when none is given, and
    /// apply every command-line override.
    #[allow(clippy::result_large_err)]
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        match &self.command {
            Commands::Scan(args) => args.apply_overrides(&mut config),
            #[cfg(feature = "web")]
            Commands::Serve(args) => {
                if let Some(ref bind) = args.bind {
                    config.server.bind = bind.clone();
                }
            }
            Commands::Sources => {}
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    config.init_logging();

    match &cli.command {
        Commands::Scan(args) => scan::execute(&config, args).await,
        #[cfg(feature = "web")]
        Commands::Serve(_) => serve::execute(&config).await,
        Commands::Sources => sources::execute(&config),
    }
}
