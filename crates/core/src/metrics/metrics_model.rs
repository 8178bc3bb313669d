use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{net_asset_value, performance_pct};

/// One point of the cumulative contribution series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    /// Transaction date of the underlying event; `None` for undated rows.
    pub date: Option<NaiveDate>,
    /// Money contributed by this event.
    pub amount: Decimal,
    /// Units purchased by this event.
    pub units: Decimal,
    pub cumulative_amount: Decimal,
    pub cumulative_units: Decimal,
    /// Average cost of one unit up to this point; zero while no units held.
    pub average_unit_price: Decimal,
}

/// NAV and performance at one unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub unit_price: Decimal,
    pub nav: Decimal,
    pub performance_pct: Decimal,
}

impl Scenario {
    /// Values a position of `total_units` (bought for `total_investment`)
    /// at `unit_price`.
    pub fn at_price(
        total_units: Decimal,
        total_investment: Decimal,
        unit_price: Decimal,
    ) -> Self {
        let nav = net_asset_value(total_units, unit_price);
        Self {
            unit_price,
            nav,
            performance_pct: performance_pct(nav, total_investment),
        }
    }
}

/// Result of re-pricing a position at an alternate unit price.
///
/// Carries both scenarios so callers can render the comparison table
/// without recomputing the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfProjection {
    pub base: Scenario,
    pub hypothetical: Scenario,
    pub nav_delta: Decimal,
    pub performance_delta: Decimal,
}
