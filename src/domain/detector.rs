//! Arbitrage detection logic.
//!
//! Listings are grouped by [`IdentityKey`], every cross-source pair inside a
//! group is evaluated in both directions, and directions that clear both the
//! profit and ROI thresholds become [`Opportunity`] values ranked by profit.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, trace};

use super::listing::{IdentityKey, Listing};
use super::money::{Price, Rate};
use super::opportunity::Opportunity;

/// Configuration for the arbitrage detector
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectorConfig {
    /// Fraction added to cost when purchasing
    #[serde(default = "default_buy_fee_rate")]
    pub buy_fee_rate: Rate,

    /// Fraction deducted from proceeds when reselling
    #[serde(default = "default_sell_fee_rate")]
    pub sell_fee_rate: Rate,

    /// Minimum net profit in currency units to report
    #[serde(default = "default_min_profit")]
    pub min_profit: Price,

    /// Minimum return on investment (fraction) to report
    #[serde(default = "default_min_roi")]
    pub min_roi: Rate,
}

fn default_buy_fee_rate() -> Rate {
    Decimal::new(12, 2) // 0.12
}

fn default_sell_fee_rate() -> Rate {
    Decimal::new(15, 2) // 0.15
}

fn default_min_profit() -> Price {
    Decimal::new(150, 1) // 15.0
}

fn default_min_roi() -> Rate {
    Decimal::new(8, 2) // 0.08
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            buy_fee_rate: default_buy_fee_rate(),
            sell_fee_rate: default_sell_fee_rate(),
            min_profit: default_min_profit(),
            min_roi: default_min_roi(),
        }
    }
}

/// Unrounded economics of buying one listing and reselling on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub quantity: u32,
    pub total_cost: Price,
    pub net_revenue: Price,
    pub profit: Price,
    pub roi: Rate,
}

impl Evaluation {
    /// Both thresholds are inclusive and compared against unrounded values.
    #[must_use]
    pub fn clears(&self, config: &DetectorConfig) -> bool {
        self.profit >= config.min_profit && self.roi >= config.min_roi
    }
}

/// Evaluate buying `buy` and reselling on `sell`, before thresholds.
///
/// Returns `None` when the direction cannot be scored: both listings come
/// from the same source, the executable quantity is zero, the total cost is
/// not positive, or the arithmetic overflows.
#[must_use]
pub fn evaluate_direction(
    buy: &Listing,
    sell: &Listing,
    config: &DetectorConfig,
) -> Option<Evaluation> {
    if buy.source() == sell.source() {
        return None;
    }

    let quantity = buy.quantity().min(sell.quantity());
    if quantity == 0 {
        return None;
    }
    let units = Decimal::from(quantity);

    let gross_cost = buy.price().checked_mul(units)?;
    let total_cost = gross_cost.checked_mul(Decimal::ONE.checked_add(config.buy_fee_rate)?)?;
    let gross_revenue = sell.price().checked_mul(units)?;
    let net_revenue =
        gross_revenue.checked_mul(Decimal::ONE.checked_sub(config.sell_fee_rate)?)?;
    let profit = net_revenue.checked_sub(total_cost)?;

    if total_cost <= Decimal::ZERO {
        return None;
    }

    let roi = profit.checked_div(total_cost)?;

    Some(Evaluation {
        quantity,
        total_cost,
        net_revenue,
        profit,
        roi,
    })
}

/// Find all qualifying opportunities in a snapshot of listings.
///
/// The result is sorted by estimated profit, highest first. Ties keep
/// generation order.
#[must_use]
pub fn find_opportunities(listings: &[Listing], config: &DetectorConfig) -> Vec<Opportunity> {
    let groups = group_by_identity(listings);
    let mut opportunities = Vec::new();
    let mut pairs_considered = 0usize;

    for (key, group) in &groups {
        if group.len() < 2 {
            continue;
        }

        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                pairs_considered += 1;
                let (left, right) = (group[i], group[j]);
                if left.source() == right.source() {
                    trace!(
                        event = key.event_name,
                        source = %left.source(),
                        "Skipping same-source pair"
                    );
                    continue;
                }
                opportunities.extend(try_direction(left, right, config));
                opportunities.extend(try_direction(right, left, config));
            }
        }
    }

    opportunities.sort_by(|a, b| b.estimated_profit().cmp(&a.estimated_profit()));

    debug!(
        listings = listings.len(),
        groups = groups.len(),
        pairs = pairs_considered,
        opportunities = opportunities.len(),
        "Detection complete"
    );

    opportunities
}

fn group_by_identity(listings: &[Listing]) -> BTreeMap<IdentityKey<'_>, Vec<&Listing>> {
    let mut groups: BTreeMap<IdentityKey<'_>, Vec<&Listing>> = BTreeMap::new();
    for listing in listings {
        groups.entry(listing.identity_key()).or_default().push(listing);
    }
    groups
}

fn try_direction(buy: &Listing, sell: &Listing, config: &DetectorConfig) -> Option<Opportunity> {
    let evaluation = evaluate_direction(buy, sell, config)?;

    if !evaluation.clears(config) {
        trace!(
            buy = %buy.source(),
            sell = %sell.source(),
            profit = %evaluation.profit,
            roi = %evaluation.roi,
            "Below threshold"
        );
        return None;
    }

    Some(Opportunity::from_pair(
        buy,
        sell,
        evaluation.quantity,
        evaluation.profit,
        evaluation.roi,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{listing, listing_builder};
    use rust_decimal_macros::dec;

    fn make_config() -> DetectorConfig {
        DetectorConfig {
            buy_fee_rate: dec!(0.10),
            sell_fee_rate: dec!(0.10),
            min_profit: dec!(1),
            min_roi: dec!(0),
        }
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = DetectorConfig::default();
        assert_eq!(config.buy_fee_rate, dec!(0.12));
        assert_eq!(config.sell_fee_rate, dec!(0.15));
        assert_eq!(config.min_profit, dec!(15.0));
        assert_eq!(config.min_roi, dec!(0.08));
    }

    #[test]
    fn evaluate_direction_applies_fees() {
        let buy = listing("ticketmaster", dec!(80));
        let sell = listing("stubhub", dec!(135));

        let eval = evaluate_direction(&buy, &sell, &make_config()).unwrap();

        // cost: 160 * 1.1 = 176, revenue: 270 * 0.9 = 243
        assert_eq!(eval.quantity, 2);
        assert_eq!(eval.total_cost, dec!(176));
        assert_eq!(eval.net_revenue, dec!(243));
        assert_eq!(eval.profit, dec!(67));
        assert_eq!(eval.roi, dec!(67) / dec!(176));
    }

    #[test]
    fn evaluate_direction_reverse_is_negative() {
        let buy = listing("stubhub", dec!(135));
        let sell = listing("ticketmaster", dec!(80));

        let eval = evaluate_direction(&buy, &sell, &make_config()).unwrap();

        // cost: 270 * 1.1 = 297, revenue: 160 * 0.9 = 144
        assert_eq!(eval.profit, dec!(-153));
        assert!(!eval.clears(&make_config()));
    }

    #[test]
    fn evaluate_direction_skips_same_source() {
        let buy = listing("stubhub", dec!(50));
        let sell = listing("stubhub", dec!(500));
        assert!(evaluate_direction(&buy, &sell, &make_config()).is_none());
    }

    #[test]
    fn evaluate_direction_skips_zero_cost() {
        let buy = listing("ticketmaster", dec!(0));
        let sell = listing("stubhub", dec!(100));
        assert!(evaluate_direction(&buy, &sell, &make_config()).is_none());
    }

    #[test]
    fn evaluate_direction_uses_smaller_quantity() {
        let buy = listing_builder("ticketmaster", dec!(80))
            .quantity(4)
            .build()
            .unwrap();
        let sell = listing_builder("stubhub", dec!(135))
            .quantity(3)
            .build()
            .unwrap();

        let eval = evaluate_direction(&buy, &sell, &make_config()).unwrap();
        assert_eq!(eval.quantity, 3);
    }

    #[test]
    fn evaluate_direction_handles_overflow_as_excluded() {
        let buy = listing("ticketmaster", Decimal::MAX);
        let sell = listing("stubhub", Decimal::MAX);
        assert!(evaluate_direction(&buy, &sell, &make_config()).is_none());
    }

    #[test]
    fn clears_is_inclusive_on_both_thresholds() {
        let eval = Evaluation {
            quantity: 1,
            total_cost: dec!(100),
            net_revenue: dec!(115),
            profit: dec!(15),
            roi: dec!(0.15),
        };
        let config = DetectorConfig {
            min_profit: dec!(15),
            min_roi: dec!(0.15),
            ..make_config()
        };
        assert!(eval.clears(&config));

        let stricter = DetectorConfig {
            min_roi: dec!(0.1501),
            ..config
        };
        assert!(!eval.clears(&stricter));
    }

    #[test]
    fn find_opportunities_detects_cheaper_side_only() {
        let listings = vec![
            listing("ticketmaster", dec!(80)),
            listing("stubhub", dec!(135)),
        ];

        let opps = find_opportunities(&listings, &make_config());

        assert_eq!(opps.len(), 1);
        assert_eq!(opps[0].buy_source().as_str(), "ticketmaster");
        assert_eq!(opps[0].sell_source().as_str(), "stubhub");
        assert_eq!(opps[0].estimated_profit(), dec!(67.00));
        assert_eq!(opps[0].roi(), dec!(0.3807));
    }

    #[test]
    fn find_opportunities_empty_input() {
        assert!(find_opportunities(&[], &make_config()).is_empty());
    }

    #[test]
    fn find_opportunities_sorts_by_profit_descending() {
        let listings = vec![
            listing_builder("ticketmaster", dec!(80))
                .row("A")
                .build()
                .unwrap(),
            listing_builder("stubhub", dec!(100))
                .row("A")
                .build()
                .unwrap(),
            listing_builder("ticketmaster", dec!(50))
                .row("B")
                .build()
                .unwrap(),
            listing_builder("stubhub", dec!(200))
                .row("B")
                .build()
                .unwrap(),
        ];

        let opps = find_opportunities(&listings, &make_config());

        assert_eq!(opps.len(), 2);
        assert_eq!(opps[0].row(), "B");
        assert_eq!(opps[1].row(), "A");
        assert!(opps[0].estimated_profit() >= opps[1].estimated_profit());
    }

    #[test]
    fn find_opportunities_evaluates_all_cross_source_pairs_in_group() {
        let listings = vec![
            listing("ticketmaster", dec!(50)),
            listing("seatgeek", dec!(60)),
            listing("stubhub", dec!(200)),
        ];

        let opps = find_opportunities(&listings, &make_config());

        // tm->sh, sg->sh, and tm->sg (cost 110, revenue 108: rejected)
        assert_eq!(opps.len(), 2);
        assert!(opps.iter().all(|o| o.sell_source().as_str() == "stubhub"));
    }
}
