//! Listing source factory.
//!
//! Creates the configured marketplace sources.

use std::sync::Arc;

use tracing::debug;

use super::{ListingSource, SeatGeekSource, SourceKind, StubHubSource, TicketmasterSource};
use crate::config::SourcesConfig;
use crate::error::Result;

/// Factory for creating listing sources.
pub struct SourceFactory;

impl SourceFactory {
    /// Create a single source for a marketplace.
    pub fn create_source(kind: SourceKind, config: &SourcesConfig) -> Result<Arc<dyn ListingSource>> {
        let source: Arc<dyn ListingSource> = match kind {
            SourceKind::Ticketmaster => Arc::new(TicketmasterSource),
            SourceKind::Stubhub => Arc::new(StubHubSource),
            SourceKind::Seatgeek => Arc::new(SeatGeekSource::from_env(&config.seatgeek)?),
        };
        Ok(source)
    }

    /// Create every enabled source, in configured order.
    pub fn create_sources(config: &SourcesConfig) -> Result<Vec<Arc<dyn ListingSource>>> {
        let sources = config
            .enabled
            .iter()
            .map(|kind| Self::create_source(*kind, config))
            .collect::<Result<Vec<_>>>()?;

        debug!(sources = ?config.enabled, "Created listing sources");
        Ok(sources)
    }
}
