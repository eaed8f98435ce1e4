//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file. Every section has
//! defaults, so an empty file (or no file at all) yields a working scanner.
//! Credentials such as `SEATGEEK_CLIENT_ID` come from the environment only.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

use crate::domain::DetectorConfig;
use crate::error::{ConfigError, Result};

mod logging;
mod sources;

pub use logging::LoggingConfig;
pub use sources::{SeatGeekConfig, SourcesConfig};

/// Web dashboard settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8000".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Fee rates and thresholds for opportunity detection.
    #[serde(default)]
    pub scanner: DetectorConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        validate_rate("buy_fee_rate", self.scanner.buy_fee_rate)?;
        validate_rate("sell_fee_rate", self.scanner.sell_fee_rate)?;

        if self.sources.enabled.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "enabled",
                reason: "at least one source must be enabled".into(),
            }
            .into());
        }
        if self.sources.seatgeek.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "per_page",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.sources.seatgeek.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.server.bind.is_empty() {
            return Err(ConfigError::MissingField { field: "bind" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn validate_rate(field: &'static str, rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("{rate} is outside [0, 1]"),
        }
        .into());
    }
    Ok(())
}
