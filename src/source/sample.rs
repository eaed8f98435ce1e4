//! Deterministic fallback listings.
//!
//! Used by marketplaces without API access and by any source that cannot
//! reach its upstream. Each marketplace sees the same three seat groups with
//! its own price factor applied, so the sample always contains spreads.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::warn;

use super::ListingSource;
use crate::domain::{Listing, Price, Region};

struct SampleSeat {
    suffix: u8,
    title: &'static str,
    city: &'static str,
    region: &'static str,
    section: &'static str,
    row: &'static str,
    quantity: u32,
    base_price: Price,
}

fn sample_seats() -> [SampleSeat; 3] {
    [
        SampleSeat {
            suffix: 1,
            title: "Live",
            city: "New York",
            region: "NY",
            section: "101",
            row: "A",
            quantity: 2,
            base_price: Decimal::new(15000, 2),
        },
        SampleSeat {
            suffix: 2,
            title: "Live",
            city: "Los Angeles",
            region: "CA",
            section: "202",
            row: "F",
            quantity: 2,
            base_price: Decimal::new(9500, 2),
        },
        SampleSeat {
            suffix: 3,
            title: "Tour",
            city: "Chicago",
            region: "IL",
            section: "310",
            row: "C",
            quantity: 4,
            base_price: Decimal::new(7200, 2),
        },
    ]
}

/// Price multiplier applied to the sample for a marketplace.
#[must_use]
pub fn price_factor(source: &str) -> Decimal {
    match source {
        "ticketmaster" => Decimal::new(82, 2),
        "stubhub" => Decimal::new(138, 2),
        _ => Decimal::ONE,
    }
}

/// Build the fallback listings for `source`, filtered by `region`.
#[must_use]
pub fn sample_listings(source: &str, query: &str, region: Option<&Region>) -> Vec<Listing> {
    let factor = price_factor(source);
    let slug = query.to_lowercase();

    sample_seats()
        .into_iter()
        .filter(|seat| region.map_or(true, |r| r.matches(seat.region)))
        .filter_map(|seat| {
            let built = Listing::builder()
                .source(source)
                .event_id(format!("{slug}-{}", seat.suffix))
                .event_name(format!("{query} {}", seat.title))
                .city(seat.city)
                .region(seat.region)
                .section(seat.section)
                .row(seat.row)
                .quantity(seat.quantity)
                .price((seat.base_price * factor).round_dp(2))
                .build();
            match built {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!(source, error = %e, "Dropping invalid sample listing");
                    None
                }
            }
        })
        .collect()
}

/// A source that always serves the sample dataset under a given name.
#[derive(Debug, Clone)]
pub struct SampleSource {
    name: String,
}

impl SampleSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl ListingSource for SampleSource {
    async fn fetch(&self, query: &str, region: Option<&Region>) -> Vec<Listing> {
        sample_listings(&self.name, query, region)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
