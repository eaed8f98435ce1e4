//! In-memory [`ListingSource`] implementations for testing.
//!
//! - [`FakeSource`] — Returns a fixed listing set, filtered by region like a
//!   well-behaved source, and counts how often it was polled.
//! - [`SlowSource`] — Wraps another source and sleeps before answering.
//!   Best for: checking that scans wait for every source.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Listing, Region};
use crate::source::ListingSource;

/// A source serving a fixed set of listings.
pub struct FakeSource {
    name: String,
    listings: Vec<Listing>,
    fetch_count: Arc<AtomicU32>,
}

impl FakeSource {
    pub fn new(name: impl Into<String>, listings: Vec<Listing>) -> Self {
        Self {
            name: name.into(),
            listings,
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Shared counter of `fetch` calls.
    pub fn fetch_count(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.fetch_count)
    }
}

#[async_trait]
impl ListingSource for FakeSource {
    async fn fetch(&self, _query: &str, region: Option<&Region>) -> Vec<Listing> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.listings
            .iter()
            .filter(|l| region.map_or(true, |r| r.matches(l.region())))
            .cloned()
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A source that answers after a delay.
pub struct SlowSource<S> {
    inner: S,
    delay: Duration,
}

impl<S: ListingSource> SlowSource<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<S: ListingSource> ListingSource for SlowSource<S> {
    async fn fetch(&self, query: &str, region: Option<&Region>) -> Vec<Listing> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch(query, region).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
