//! Domain identifier types with proper encapsulation.

use serde::Serialize;
use std::fmt;

/// Marketplace identifier - newtype for type safety.
///
/// Two listings can only form an arbitrage pair when their source IDs differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Create a new SourceId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the source ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SourceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Source-scoped event identifier.
///
/// Only unique within the marketplace that issued it; never used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create a new EventId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the event ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_id_new_and_as_str() {
        let id = SourceId::new("stubhub");
        assert_eq!(id.as_str(), "stubhub");
    }

    #[test]
    fn source_id_display() {
        let id = SourceId::from("seatgeek".to_string());
        assert_eq!(format!("{}", id), "seatgeek");
    }

    #[test]
    fn event_id_from_str() {
        let id = EventId::from("sg-42");
        assert_eq!(id.as_str(), "sg-42");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&SourceId::from("ticketmaster")).unwrap();
        assert_eq!(json, "\"ticketmaster\"");

        let json = serde_json::to_string(&EventId::from("e-1")).unwrap();
        assert_eq!(json, "\"e-1\"");
    }
}
