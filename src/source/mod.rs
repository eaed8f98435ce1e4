//! Listing source abstraction layer.
//!
//! Every marketplace is a [`ListingSource`]. Sources are responsible for
//! their own failures: a source that cannot reach its upstream returns an
//! empty or fallback sequence instead of an error, and applies the region
//! filter itself before returning.
//!
//! ## Adding a New Source
//!
//! 1. Create a module under `source/<name>`
//! 2. Implement [`ListingSource`]
//! 3. Add a [`SourceKind`] variant and wire it in [`SourceFactory`]

mod factory;
mod marketplace;
mod sample;
pub mod seatgeek;

pub use factory::SourceFactory;
pub use marketplace::{StubHubSource, TicketmasterSource};
pub use sample::{sample_listings, SampleSource};
pub use seatgeek::SeatGeekSource;

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

use crate::domain::{Listing, Region};

/// Provider of listings for an event query.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings matching `query`, restricted to `region` when given.
    ///
    /// Never fails: unavailable upstreams yield an empty or fallback list.
    async fn fetch(&self, query: &str, region: Option<&Region>) -> Vec<Listing>;

    /// Get the source name for logging/debugging.
    fn name(&self) -> &str;

    /// Whether this source queries a remote upstream rather than sample data.
    fn is_live(&self) -> bool {
        false
    }
}

/// Supported marketplaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Ticketmaster,
    Stubhub,
    Seatgeek,
}

impl SourceKind {
    /// Default polling order.
    pub const ALL: [SourceKind; 3] = [Self::Ticketmaster, Self::Stubhub, Self::Seatgeek];

    /// Get the marketplace identifier used on listings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ticketmaster => "ticketmaster",
            Self::Stubhub => "stubhub",
            Self::Seatgeek => "seatgeek",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
