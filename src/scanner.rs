//! Scan orchestration.
//!
//! [`ArbitrageScanner`] polls every configured source concurrently, waits
//! for all of them, then hands the combined snapshot to the detector.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{find_opportunities, DetectorConfig, Listing, Opportunity, Price, Rate, Region};
use crate::error::Result;
use crate::source::{ListingSource, SourceFactory};

/// Scans listing sources for arbitrage opportunities.
///
/// Holds no state between scans; cloning is cheap and shares the sources.
#[derive(Clone)]
pub struct ArbitrageScanner {
    config: DetectorConfig,
    sources: Arc<[Arc<dyn ListingSource>]>,
}

impl ArbitrageScanner {
    /// Create a scanner over the given sources.
    pub fn new(config: DetectorConfig, sources: Vec<Arc<dyn ListingSource>>) -> Self {
        Self {
            config,
            sources: sources.into(),
        }
    }

    /// Create a scanner with the sources enabled in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let sources = SourceFactory::create_sources(&config.sources)?;
        Ok(Self::new(config.scanner.clone(), sources))
    }

    /// Copy of this scanner with different profit and ROI thresholds.
    #[must_use]
    pub fn with_thresholds(&self, min_profit: Price, min_roi: Rate) -> Self {
        Self {
            config: DetectorConfig {
                min_profit,
                min_roi,
                ..self.config.clone()
            },
            sources: Arc::clone(&self.sources),
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Names of the configured sources, in polling order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetch from every source concurrently and union the results.
    pub async fn collect_listings(&self, query: &str, region: Option<&Region>) -> Vec<Listing> {
        let fetches = self.sources.iter().map(|source| async move {
            let listings = source.fetch(query, region).await;
            debug!(source = source.name(), count = listings.len(), "Fetched listings");
            listings
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }

    /// Run one scan and return opportunities ranked by profit.
    ///
    /// An empty result means nothing qualified; it is not an error.
    pub async fn scan(&self, query: &str, region: Option<&Region>) -> Vec<Opportunity> {
        let listings = self.collect_listings(query, region).await;
        let opportunities = find_opportunities(&listings, &self.config);

        info!(
            query,
            region = region.map(Region::as_str),
            listings = listings.len(),
            opportunities = opportunities.len(),
            "Scan complete"
        );

        opportunities
    }

    /// Run one scan and wrap the result with its query and timestamp.
    pub async fn scan_report(&self, query: &str, region: Option<&Region>) -> ScanReport {
        let opportunities = self.scan(query, region).await;
        ScanReport::new(query, region.cloned(), opportunities)
    }
}

/// Serializable result of one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub query: String,
    pub region: Option<Region>,
    pub scanned_at: DateTime<Utc>,
    pub count: usize,
    pub opportunities: Vec<Opportunity>,
}

impl ScanReport {
    pub fn new(query: impl Into<String>, region: Option<Region>, opportunities: Vec<Opportunity>) -> Self {
        Self {
            query: query.into(),
            region,
            scanned_at: Utc::now(),
            count: opportunities.len(),
            opportunities,
        }
    }
}
