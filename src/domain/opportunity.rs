//! Opportunity type.
//!
//! An `Opportunity` is a directed buy/sell recommendation produced by the
//! detector. Its profit and ROI are always computed from two listings and
//! are never supplied by callers, so there is no public constructor.

use serde::Serialize;

use super::ids::{EventId, SourceId};
use super::listing::Listing;
use super::money::{round_profit, round_roi, Price, Rate};

/// A detected ticket arbitrage opportunity.
///
/// Identity fields (event ID, event name, region) are inherited from the
/// buy-side listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    event_id: EventId,
    event_name: String,
    city: String,
    region: String,
    section: String,
    row: String,
    quantity: u32,
    buy_source: SourceId,
    #[serde(with = "rust_decimal::serde::float")]
    buy_price: Price,
    sell_source: SourceId,
    #[serde(with = "rust_decimal::serde::float")]
    sell_price: Price,
    #[serde(with = "rust_decimal::serde::float")]
    estimated_profit: Price,
    #[serde(with = "rust_decimal::serde::float")]
    roi: Rate,
}

impl Opportunity {
    /// Create an opportunity from an accepted directed pair, rounding profit
    /// to cents and ROI to four places.
    pub(crate) fn from_pair(
        buy: &Listing,
        sell: &Listing,
        quantity: u32,
        profit: Price,
        roi: Rate,
    ) -> Self {
        let key = buy.identity_key();
        Self {
            event_id: buy.event_id().clone(),
            event_name: key.event_name.to_string(),
            city: key.city.to_string(),
            region: buy.region().to_string(),
            section: key.section.to_string(),
            row: key.row.to_string(),
            quantity,
            buy_source: buy.source().clone(),
            buy_price: buy.price(),
            sell_source: sell.source().clone(),
            sell_price: sell.price(),
            estimated_profit: round_profit(profit),
            roi: round_roi(roi),
        }
    }

    /// Get the buy-side event ID.
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Get the buy-side region code.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn row(&self) -> &str {
        &self.row
    }

    /// Get the executable quantity (min of both sides).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the marketplace to buy from.
    pub fn buy_source(&self) -> &SourceId {
        &self.buy_source
    }

    pub fn buy_price(&self) -> Price {
        self.buy_price
    }

    /// Get the marketplace to resell on.
    pub fn sell_source(&self) -> &SourceId {
        &self.sell_source
    }

    pub fn sell_price(&self) -> Price {
        self.sell_price
    }

    /// Get the fee-adjusted net profit, rounded to cents.
    pub fn estimated_profit(&self) -> Price {
        self.estimated_profit
    }

    /// Get profit over total cost, rounded to four places.
    pub fn roi(&self) -> Rate {
        self.roi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::listing;
    use rust_decimal_macros::dec;

    #[test]
    fn from_pair_inherits_identity_from_buy_side() {
        let buy = crate::testkit::domain::listing_builder("ticketmaster", dec!(80))
            .event_id("tm-1")
            .region("MA")
            .build()
            .unwrap();
        let sell = crate::testkit::domain::listing_builder("stubhub", dec!(135))
            .event_id("sh-7")
            .region("ma")
            .build()
            .unwrap();

        let opp = Opportunity::from_pair(&buy, &sell, 2, dec!(65.4), dec!(0.371590909));

        assert_eq!(opp.event_id().as_str(), "tm-1");
        assert_eq!(opp.region(), "MA");
        assert_eq!(opp.buy_source().as_str(), "ticketmaster");
        assert_eq!(opp.sell_source().as_str(), "stubhub");
        assert_eq!(opp.buy_price(), dec!(80));
        assert_eq!(opp.sell_price(), dec!(135));
        assert_eq!(opp.quantity(), 2);
    }

    #[test]
    fn from_pair_rounds_profit_and_roi() {
        let buy = listing("ticketmaster", dec!(80));
        let sell = listing("stubhub", dec!(135));

        let opp = Opportunity::from_pair(&buy, &sell, 2, dec!(67.005), dec!(0.380710227));

        assert_eq!(opp.estimated_profit(), dec!(67.00));
        assert_eq!(opp.roi(), dec!(0.3807));
    }

    #[test]
    fn serializes_numbers_as_json_numbers() {
        let buy = listing("ticketmaster", dec!(80));
        let sell = listing("stubhub", dec!(135));
        let opp = Opportunity::from_pair(&buy, &sell, 2, dec!(67.5), dec!(0.25));

        let value = serde_json::to_value(&opp).unwrap();

        assert_eq!(value["buy_source"], "ticketmaster");
        assert_eq!(value["sell_source"], "stubhub");
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["buy_price"], 80.0);
        assert_eq!(value["estimated_profit"], 67.5);
        assert_eq!(value["roi"], 0.25);
        assert_eq!(value["event_name"], "Test Event");
    }
}
