//! SeatGeek REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};
use url::Url;

use super::types::{Event, EventsResponse};
use crate::config::SeatGeekConfig;
use crate::domain::{Listing, Region};
use crate::error::Result;
use crate::source::{sample_listings, ListingSource, SourceKind};

/// Environment variable holding the SeatGeek client ID.
pub const CLIENT_ID_ENV: &str = "SEATGEEK_CLIENT_ID";

const MAX_QUANTITY: i64 = 4;
const DEFAULT_PRICE: Decimal = dec!(80);

/// HTTP client for the SeatGeek events API.
pub struct SeatGeekSource {
    client: Client,
    api_url: String,
    per_page: u32,
    client_id: Option<String>,
}

impl SeatGeekSource {
    /// Create a new SeatGeek source.
    ///
    /// Without a `client_id` the source never touches the network and
    /// serves the sample dataset.
    pub fn new(config: &SeatGeekConfig, client_id: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
            client_id: client_id.filter(|id| !id.trim().is_empty()),
        })
    }

    /// Create a source reading the client ID from `SEATGEEK_CLIENT_ID`.
    pub fn from_env(config: &SeatGeekConfig) -> Result<Self> {
        Self::new(config, std::env::var(CLIENT_ID_ENV).ok())
    }

    /// Whether remote queries are enabled.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some()
    }

    async fn fetch_events(&self, client_id: &str, query: &str) -> Result<Vec<Event>> {
        let url = Url::parse_with_params(
            &format!("{}/events", self.api_url),
            &[
                ("q", query),
                ("per_page", &self.per_page.to_string()),
                ("client_id", client_id),
            ],
        )?;

        debug!(endpoint = %self.api_url, query, "Fetching SeatGeek events");

        let response: EventsResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.events)
    }
}

#[async_trait]
impl ListingSource for SeatGeekSource {
    async fn fetch(&self, query: &str, region: Option<&Region>) -> Vec<Listing> {
        let Some(client_id) = self.client_id.as_deref() else {
            debug!("No SeatGeek client ID configured, serving sample listings");
            return sample_listings(self.name(), query, region);
        };

        match self.fetch_events(client_id, query).await {
            Ok(events) => {
                let listings = map_events(self.name(), &events, region);
                if listings.is_empty() {
                    info!(
                        events = events.len(),
                        "No SeatGeek events matched, serving sample listings"
                    );
                    return sample_listings(self.name(), query, region);
                }
                info!(count = listings.len(), "Fetched SeatGeek listings");
                listings
            }
            Err(e) => {
                warn!(error = %e, "SeatGeek request failed, serving sample listings");
                sample_listings(self.name(), query, region)
            }
        }
    }

    fn name(&self) -> &str {
        SourceKind::Seatgeek.as_str()
    }

    fn is_live(&self) -> bool {
        self.has_credentials()
    }
}

/// Map SeatGeek events to general-admission listings.
///
/// Events outside `region` are dropped, as are events whose price cannot be
/// represented as a non-negative decimal.
#[must_use]
pub fn map_events(source: &str, events: &[Event], region: Option<&Region>) -> Vec<Listing> {
    events
        .iter()
        .filter_map(|event| {
            let venue = event.venue.as_ref();
            let state = venue.and_then(|v| v.state.as_deref());

            if let Some(region) = region {
                if !state.is_some_and(|s| region.matches(s)) {
                    return None;
                }
            }

            let stats = event.stats.as_ref();
            let quantity = stats
                .and_then(|s| s.listing_count)
                .unwrap_or(1)
                .clamp(1, MAX_QUANTITY);
            let price = match stats.and_then(|s| s.average_price) {
                Some(avg) if avg != 0.0 => Decimal::from_f64(avg),
                _ => Some(DEFAULT_PRICE),
            };
            let Some(price) = price else {
                warn!(event_id = %event.id_string(), "Unrepresentable SeatGeek price");
                return None;
            };

            let built = Listing::builder()
                .source(source)
                .event_id(format!("sg-{}", event.id_string()))
                .event_name(event.title.as_deref().unwrap_or("Unknown Event"))
                .city(venue.and_then(|v| v.city.as_deref()).unwrap_or("Unknown"))
                .region(state.unwrap_or("NA"))
                .section("GEN")
                .row("GA")
                .quantity(quantity as u32)
                .price(price)
                .build();

            match built {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!(event_id = %event.id_string(), error = %e, "Dropping SeatGeek event");
                    None
                }
            }
        })
        .collect()
}
