//! SeatGeek listing source.
//!
//! Queries the SeatGeek events API when a client ID is available and maps
//! each event to a general-admission listing. Falls back to the sample
//! dataset when credentials are missing, the request fails, or nothing maps.

mod client;
pub mod types;

pub use client::{map_events, SeatGeekSource, CLIENT_ID_ENV};
