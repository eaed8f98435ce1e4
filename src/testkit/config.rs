//! Canonical test configurations.
//!
//! Single source of truth for detector configs used across tests.

use rust_decimal_macros::dec;

use crate::domain::{DetectorConfig, Price, Rate};

/// 10% fees both ways, profit >= 1, any non-negative ROI.
pub fn permissive() -> DetectorConfig {
    DetectorConfig {
        buy_fee_rate: dec!(0.10),
        sell_fee_rate: dec!(0.10),
        min_profit: dec!(1),
        min_roi: dec!(0),
    }
}

/// No fees, with the given thresholds.
pub fn fee_free(min_profit: Price, min_roi: Rate) -> DetectorConfig {
    DetectorConfig {
        buy_fee_rate: dec!(0),
        sell_fee_rate: dec!(0),
        min_profit,
        min_roi,
    }
}
