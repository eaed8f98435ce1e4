//! Marketplaces without public listing APIs.
//!
//! These serve the fallback sample under their own marketplace name.

use async_trait::async_trait;
use tracing::debug;

use super::sample::sample_listings;
use super::{ListingSource, SourceKind};
use crate::domain::{Listing, Region};

/// Ticketmaster listings.
#[derive(Debug, Clone, Default)]
pub struct TicketmasterSource;

#[async_trait]
impl ListingSource for TicketmasterSource {
    async fn fetch(&self, query: &str, region: Option<&Region>) -> Vec<Listing> {
        let listings = sample_listings(self.name(), query, region);
        debug!(source = self.name(), count = listings.len(), "Serving sample listings");
        listings
    }

    fn name(&self) -> &str {
        SourceKind::Ticketmaster.as_str()
    }
}

/// StubHub listings.
#[derive(Debug, Clone, Default)]
pub struct StubHubSource;

#[async_trait]
impl ListingSource for StubHubSource {
    async fn fetch(&self, query: &str, region: Option<&Region>) -> Vec<Listing> {
        let listings = sample_listings(self.name(), query, region);
        debug!(source = self.name(), count = listings.len(), "Serving sample listings");
        listings
    }

    fn name(&self) -> &str {
        SourceKind::Stubhub.as_str()
    }
}
