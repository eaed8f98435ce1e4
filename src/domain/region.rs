//! Two-letter region codes (US state or similar).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected region input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid region code '{0}': expected two letters (e.g. NY)")]
pub struct InvalidRegion(pub String);

/// A normalized, upper-case two-letter region code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Get the region code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a listing's region label refers to this region.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code.trim())
    }
}

impl FromStr for Region {
    type Err = InvalidRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidRegion(s.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_uppercases() {
        let region: Region = "ny".parse().unwrap();
        assert_eq!(region.as_str(), "NY");
        assert_eq!(region.to_string(), "NY");
    }

    #[test]
    fn trims_whitespace() {
        let region: Region = " ca ".parse().unwrap();
        assert_eq!(region.as_str(), "CA");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("NYC".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
        assert!("N".parse::<Region>().is_err());
    }

    #[test]
    fn rejects_non_letters() {
        let err = "1A".parse::<Region>().unwrap_err();
        assert_eq!(err, InvalidRegion("1A".into()));
        assert!(err.to_string().contains("two letters"));
    }

    #[test]
    fn matches_is_case_insensitive() {
        let region: Region = "IL".parse().unwrap();
        assert!(region.matches("IL"));
        assert!(region.matches("il"));
        assert!(!region.matches("IN"));
    }
}
