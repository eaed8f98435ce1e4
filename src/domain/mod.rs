//! Marketplace-agnostic domain logic.

mod detector;
mod ids;
mod listing;
mod money;
mod opportunity;
mod region;

// Core domain types
pub use ids::{EventId, SourceId};
pub use listing::{IdentityKey, Listing, ListingBuildError, ListingBuilder, DEFAULT_CURRENCY};
pub use money::{format_usd, round_profit, round_roi, Price, Rate};
pub use opportunity::Opportunity;
pub use region::{InvalidRegion, Region};

// Detector
pub use detector::{evaluate_direction, find_opportunities, DetectorConfig, Evaluation};
