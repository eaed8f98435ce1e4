//! Listing type with builder pattern.
//!
//! A `Listing` is one marketplace's quote for a seat group. Listings are
//! built through `ListingBuilder`, which enforces quantity >= 1 and
//! price >= 0 so downstream matching never sees malformed inventory.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::ids::{EventId, SourceId};
use super::money::Price;

/// Currency assumed when a source does not state one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Error returned when building a Listing fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingBuildError {
    /// A required field was not provided.
    MissingField(&'static str),
    /// Quantity was zero.
    ZeroQuantity,
    /// Price was below zero.
    NegativePrice,
}

impl fmt::Display for ListingBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::ZeroQuantity => write!(f, "quantity must be at least 1"),
            Self::NegativePrice => write!(f, "price must not be negative"),
        }
    }
}

impl std::error::Error for ListingBuildError {}

/// The tuple that decides whether two listings denote the same seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey<'a> {
    pub event_name: &'a str,
    pub city: &'a str,
    pub section: &'a str,
    pub row: &'a str,
}

/// A single quoted inventory unit from one marketplace.
///
/// Use `Listing::builder()` to construct instances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    source: SourceId,
    event_id: EventId,
    event_name: String,
    city: String,
    region: String,
    section: String,
    row: String,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Price,
    currency: String,
}

impl Listing {
    /// Create a new builder for constructing a Listing.
    pub fn builder() -> ListingBuilder {
        ListingBuilder::new()
    }

    /// Get the marketplace that quoted this listing.
    pub fn source(&self) -> &SourceId {
        &self.source
    }

    /// Get the source-scoped event ID.
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Get the region/state code as reported by the source.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn row(&self) -> &str {
        &self.row
    }

    /// Get the number of seats available (always >= 1).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the unit price (always >= 0).
    pub fn price(&self) -> Price {
        self.price
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Get the key used to match this listing against other sources.
    pub fn identity_key(&self) -> IdentityKey<'_> {
        IdentityKey {
            event_name: &self.event_name,
            city: &self.city,
            section: &self.section,
            row: &self.row,
        }
    }
}

/// Builder for constructing `Listing` instances.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ticketfinder::domain::Listing;
///
/// let listing = Listing::builder()
///     .source("stubhub")
///     .event_id("evt-1")
///     .event_name("Test Event")
///     .city("Boston")
///     .region("MA")
///     .section("101")
///     .row("A")
///     .quantity(2)
///     .price(dec!(135.00))
///     .build()
///     .unwrap();
///
/// assert_eq!(listing.currency(), "USD");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ListingBuilder {
    source: Option<SourceId>,
    event_id: Option<EventId>,
    event_name: Option<String>,
    city: Option<String>,
    region: Option<String>,
    section: Option<String>,
    row: Option<String>,
    quantity: Option<u32>,
    price: Option<Price>,
    currency: Option<String>,
}

impl ListingBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<SourceId>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn event_id(mut self, event_id: impl Into<EventId>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    pub fn event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn row(mut self, row: impl Into<String>) -> Self {
        self.row = Some(row.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Override the currency (defaults to USD).
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Build the Listing, validating quantity and price.
    ///
    /// # Errors
    ///
    /// Returns `ListingBuildError` if a required field is missing, the
    /// quantity is zero, or the price is negative.
    pub fn build(self) -> Result<Listing, ListingBuildError> {
        let source = self.source.ok_or(ListingBuildError::MissingField("source"))?;
        let event_id = self
            .event_id
            .ok_or(ListingBuildError::MissingField("event_id"))?;
        let event_name = self
            .event_name
            .ok_or(ListingBuildError::MissingField("event_name"))?;
        let city = self.city.ok_or(ListingBuildError::MissingField("city"))?;
        let region = self.region.ok_or(ListingBuildError::MissingField("region"))?;
        let section = self
            .section
            .ok_or(ListingBuildError::MissingField("section"))?;
        let row = self.row.ok_or(ListingBuildError::MissingField("row"))?;
        let quantity = self
            .quantity
            .ok_or(ListingBuildError::MissingField("quantity"))?;
        let price = self.price.ok_or(ListingBuildError::MissingField("price"))?;

        if quantity == 0 {
            return Err(ListingBuildError::ZeroQuantity);
        }
        if price < Decimal::ZERO {
            return Err(ListingBuildError::NegativePrice);
        }

        Ok(Listing {
            source,
            event_id,
            event_name,
            city,
            region,
            section,
            row,
            quantity,
            price,
            currency: self
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}
