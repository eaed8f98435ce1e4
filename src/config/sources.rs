//! Listing source configuration.

use serde::Deserialize;

use crate::source::SourceKind;

/// Which marketplaces to poll and how.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Marketplaces to query, in order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<SourceKind>,
    #[serde(default)]
    pub seatgeek: SeatGeekConfig,
}

fn default_enabled() -> Vec<SourceKind> {
    SourceKind::ALL.to_vec()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            seatgeek: SeatGeekConfig::default(),
        }
    }
}

/// SeatGeek API settings.
///
/// The client ID is read from `SEATGEEK_CLIENT_ID`, never from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatGeekConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Events requested per query.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.seatgeek.com/2".into()
}

fn default_per_page() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for SeatGeekConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
