//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — In-memory [`ListingSource`](crate::source::ListingSource)
//!   implementations: `FakeSource`, `SlowSource`.
//! - [`domain`] — Builders for listings with sensible defaults.
//! - [`config`] — Canonical detector configurations.

pub mod config;
pub mod domain;
pub mod source;
