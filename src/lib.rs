//! TicketFinder - cross-marketplace ticket arbitrage scanning.
//!
//! Pulls seat listings for an event from several ticket marketplaces, groups
//! listings that describe the same seats, and reports buy-low/sell-high
//! pairs whose profit after fees clears configurable thresholds.
//!
//! # Modules
//!
//! - [`domain`] - Listings, opportunities, and the pure detection algorithm
//! - [`source`] - The [`source::ListingSource`] contract and marketplace adapters
//! - [`scanner`] - Concurrent fetch across sources followed by detection
//! - [`config`] - TOML configuration with defaults and validation
//! - [`cli`] - The `ticketfinder` command line
//! - `web` - HTML dashboard and JSON API (requires the `web` feature)
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ticketfinder::domain::DetectorConfig;
//! use ticketfinder::scanner::ArbitrageScanner;
//! use ticketfinder::source::{StubHubSource, TicketmasterSource};
//!
//! # async fn demo() {
//! let scanner = ArbitrageScanner::new(
//!     DetectorConfig::default(),
//!     vec![Arc::new(TicketmasterSource), Arc::new(StubHubSource)],
//! );
//! let opportunities = scanner.scan("Taylor Swift", None).await;
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod scanner;
pub mod source;

#[cfg(feature = "web")]
pub mod web;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
