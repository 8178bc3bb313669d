//! Contribution register domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DATE_FORMAT;

/// Cleans a money or quantity cell and parses it as a `Decimal`.
///
/// Register exports format numbers with thousands-separator commas, stray
/// spaces, and quote characters ("1,000,000", " 10 000 "). Those are
/// stripped before parsing; scientific notation is accepted as a second
/// attempt. Unparseable cells fall back to zero rather than failing the
/// load - an intentional data-quality trade-off inherited from the register
/// workflow, where a single hand-edited cell must not take down the file.
pub fn parse_decimal_or_default(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '"'))
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(&cleaned) {
        Ok(value) => value,
        Err(e_decimal) => match Decimal::from_scientific(&cleaned) {
            Ok(value) => value,
            Err(e_scientific) => {
                log::warn!(
                    "Failed to parse numeric cell '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    raw, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses a register date cell against the strict `DD/MM/YYYY` format.
///
/// Unparseable dates become `None` instead of raising; date-based sorts and
/// aggregates must treat `None` as absent.
pub fn parse_date_or_none(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// One contribution event from the register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRecord {
    /// Transaction date; `None` when the raw cell does not parse.
    pub date: Option<NaiveDate>,
    /// The raw date cell as exported, kept for report detail rows.
    pub date_raw: String,
    /// Money contributed by this event.
    pub amount: Decimal,
    /// Price of one fund unit at transaction time.
    pub unit_price: Decimal,
    /// Fund units purchased.
    pub units: Decimal,
    pub bank: String,
    pub account: String,
    pub category: String,
    pub content: String,
    pub shareholder_name: String,
    /// Shareholder identifier; matched case-insensitively.
    pub shareholder_id: String,
}

impl ContributionRecord {
    /// Case-insensitive identity match.
    pub fn matches_id(&self, shareholder_id: &str) -> bool {
        self.shareholder_id.to_uppercase() == shareholder_id.to_uppercase()
    }
}

/// Immutable in-memory table of primary contribution rows.
///
/// Loaded once per process (or on explicit reload) and shared behind `Arc`;
/// per-query record sets are recomputed from it and discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionTable {
    records: Vec<ContributionRecord>,
}

impl ContributionTable {
    pub fn new(records: Vec<ContributionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ContributionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct shareholder ids in the table.
    pub fn shareholder_count(&self) -> usize {
        let mut ids: Vec<String> = self
            .records
            .iter()
            .map(|r| r.shareholder_id.to_uppercase())
            .collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }

    /// All records for one shareholder, sorted by parsed date ascending with
    /// undated rows last. The sort is stable, so ties keep register order.
    pub fn records_for(&self, shareholder_id: &str) -> Vec<ContributionRecord> {
        let mut matches: Vec<ContributionRecord> = self
            .records
            .iter()
            .filter(|r| r.matches_id(shareholder_id))
            .cloned()
            .collect();
        matches.sort_by_key(|r| (r.date.is_none(), r.date));
        matches
    }
}
