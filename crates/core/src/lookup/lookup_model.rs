//! Lookup domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contributions::ContributionRecord;
use crate::errors::{Result, ValidationError};
use crate::metrics::{CumulativePoint, Scenario, WhatIfProjection};

/// A lookup request: shareholder identifier plus the reference unit price
/// used for the base valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub shareholder_id: String,
    pub reference_price: Decimal,
}

impl LookupQuery {
    pub fn new(shareholder_id: impl Into<String>, reference_price: Decimal) -> Self {
        Self {
            shareholder_id: shareholder_id.into(),
            reference_price,
        }
    }

    /// Rejects blank identifiers and negative reference prices.
    pub fn validate(&self) -> Result<()> {
        if self.shareholder_id.trim().is_empty() {
            return Err(ValidationError::MissingField("shareholderId".to_string()).into());
        }
        if self.reference_price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "reference price must be non-negative, got {}",
                self.reference_price
            ))
            .into());
        }
        Ok(())
    }
}

/// Outcome of a lookup.
///
/// "Not found" is a state for the caller to present, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LookupResult {
    Found(ShareholderSummary),
    #[serde(rename_all = "camelCase")]
    NotFound { shareholder_id: String },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn summary(&self) -> Option<&ShareholderSummary> {
        match self {
            LookupResult::Found(summary) => Some(summary),
            LookupResult::NotFound { .. } => None,
        }
    }
}

/// Aggregated view of one shareholder's contributions, valued at the
/// query's reference price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderSummary {
    /// The queried identifier, uppercased.
    pub shareholder_id: String,
    /// Display name from the earliest record.
    pub shareholder_name: String,
    pub transaction_count: usize,
    /// Sum of all contribution amounts.
    pub total_investment: Decimal,
    /// Sum of all purchased units.
    pub total_units: Decimal,
    /// Earliest parsed transaction date; undated rows are ignored.
    pub first_date: Option<NaiveDate>,
    /// Latest parsed transaction date; undated rows are ignored.
    pub last_date: Option<NaiveDate>,
    /// Valuation at the reference price.
    pub base: Scenario,
    /// Running totals in date order.
    pub series: Vec<CumulativePoint>,
    /// The matched records, date ascending with undated rows last.
    pub records: Vec<ContributionRecord>,
}

impl ShareholderSummary {
    /// Re-prices the position at an alternate unit price.
    ///
    /// Pure recomputation against the stored totals; calling it repeatedly
    /// with different prices never mutates the summary. At the base price
    /// the deltas are exactly zero.
    pub fn project(&self, unit_price: Decimal) -> WhatIfProjection {
        let hypothetical =
            Scenario::at_price(self.total_units, self.total_investment, unit_price);
        WhatIfProjection {
            nav_delta: hypothetical.nav - self.base.nav,
            performance_delta: hypothetical.performance_pct - self.base.performance_pct,
            base: self.base.clone(),
            hypothetical,
        }
    }
}
