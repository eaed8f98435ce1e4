//! Query parameter parsing shared by the HTML and JSON routes.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::ApiError;
use crate::domain::{DetectorConfig, Price, Rate, Region};

/// Raw query string parameters.
///
/// Everything arrives as text so that empty form fields read as "not set"
/// rather than failing to parse.
#[derive(Debug, Default, Deserialize)]
pub struct ScanParams {
    pub event: Option<String>,
    pub state: Option<String>,
    pub min_profit: Option<String>,
    pub min_roi: Option<String>,
}

/// Validated scan request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    pub event: Option<String>,
    pub region: Option<Region>,
    pub min_profit: Price,
    pub min_roi: Rate,
}

impl ScanParams {
    /// Validate parameters, filling unset thresholds from `defaults`.
    pub fn resolve(&self, defaults: &DetectorConfig) -> Result<ScanRequest, ApiError> {
        let event = non_empty(&self.event).map(str::to_string);

        let region = non_empty(&self.state)
            .map(|s| s.parse::<Region>())
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let min_profit = threshold("min_profit", &self.min_profit)?.unwrap_or(defaults.min_profit);
        let min_roi = threshold("min_roi", &self.min_roi)?.unwrap_or(defaults.min_roi);

        Ok(ScanRequest {
            event,
            region,
            min_profit,
            min_roi,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn threshold(field: &str, raw: &Option<String>) -> Result<Option<Decimal>, ApiError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };

    let value: Decimal = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{field} must be a number, got {raw:?}")))?;
    if value < Decimal::ZERO {
        return Err(ApiError::BadRequest(format!("{field} must not be negative")));
    }
    Ok(Some(value))
}
