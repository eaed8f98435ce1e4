//! Builders for domain primitives used across tests.
//!
//! Every listing shares the same identity key (`Test Event`, Boston,
//! section 101, row A) unless overridden, so two listings from different
//! sources form a pair by default.

use crate::domain::{Listing, ListingBuilder, Price};

/// A builder pre-filled with the default seat group, quantity 2.
pub fn listing_builder(source: &str, price: Price) -> ListingBuilder {
    Listing::builder()
        .source(source)
        .event_id("event-1")
        .event_name("Test Event")
        .city("Boston")
        .region("MA")
        .section("101")
        .row("A")
        .quantity(2)
        .price(price)
}

/// A listing in the default seat group.
pub fn listing(source: &str, price: Price) -> Listing {
    listing_builder(source, price)
        .build()
        .expect("default test listing is valid")
}

/// A listing in the default seat group with a given quantity.
pub fn listing_with_quantity(source: &str, price: Price, quantity: u32) -> Listing {
    listing_builder(source, price)
        .quantity(quantity)
        .build()
        .expect("test listing is valid")
}
