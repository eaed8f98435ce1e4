//! Monetary types for price and fee representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Fractional rate (fees, ROI) represented as a Decimal.
pub type Rate = Decimal;

/// Decimal places kept on a reported profit.
pub const PROFIT_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept on a reported ROI.
pub const ROI_DECIMAL_PLACES: u32 = 4;

/// Format a price as dollars with two decimals.
pub fn format_usd(value: Price) -> String {
    format!("${:.2}", value)
}

/// Round a profit figure to cents.
#[must_use]
pub fn round_profit(profit: Price) -> Price {
    profit.round_dp_with_strategy(PROFIT_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Round an ROI fraction to four places.
#[must_use]
pub fn round_roi(roi: Rate) -> Rate {
    roi.round_dp_with_strategy(ROI_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_profit_to_cents() {
        assert_eq!(round_profit(dec!(76.384)), dec!(76.38));
        assert_eq!(round_profit(dec!(-2.346)), dec!(-2.35));
    }

    #[test]
    fn rounds_profit_midpoint_to_even() {
        assert_eq!(round_profit(dec!(0.125)), dec!(0.12));
        assert_eq!(round_profit(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn format_usd_pads_cents() {
        assert_eq!(format_usd(dec!(5)), "$5.00");
        assert_eq!(format_usd(dec!(48.37)), "$48.37");
        assert_eq!(format_usd(dec!(212.5)), "$212.50");
    }

    #[test]
    fn rounds_roi_to_four_places() {
        assert_eq!(round_roi(dec!(0.277232142857)), dec!(0.2772));
        assert_eq!(round_roi(dec!(0.08)), dec!(0.08));
    }
}
