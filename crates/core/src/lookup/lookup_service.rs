//! Shareholder lookup over the loaded register.

use std::path::Path;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::lookup_model::{LookupQuery, LookupResult, ShareholderSummary};
use crate::contributions::{ContributionTable, TableCache};
use crate::errors::Result;
use crate::metrics::{cumulative_series, Scenario};

/// Looks up one shareholder in the table.
///
/// Stateless: the result is a pure function of the table and the query, so
/// it is safe to call repeatedly (what-if sliders, re-rendered views)
/// without touching the loaded data.
pub fn lookup(table: &ContributionTable, query: &LookupQuery) -> Result<LookupResult> {
    query.validate()?;

    let records = table.records_for(&query.shareholder_id);
    if records.is_empty() {
        debug!("no contributions found for id '{}'", query.shareholder_id);
        return Ok(LookupResult::NotFound {
            shareholder_id: query.shareholder_id.to_uppercase(),
        });
    }

    let total_investment: Decimal = records.iter().map(|r| r.amount).sum();
    let total_units: Decimal = records.iter().map(|r| r.units).sum();

    // Records are date ascending with undated rows last, so the first and
    // last parsed dates bound the dated subset.
    let first_date = records.iter().find_map(|r| r.date);
    let last_date = records.iter().rev().find_map(|r| r.date);

    let summary = ShareholderSummary {
        shareholder_id: query.shareholder_id.to_uppercase(),
        shareholder_name: records[0].shareholder_name.clone(),
        transaction_count: records.len(),
        total_investment,
        total_units,
        first_date,
        last_date,
        base: Scenario::at_price(total_units, total_investment, query.reference_price),
        series: cumulative_series(&records),
        records,
    };
    Ok(LookupResult::Found(summary))
}

/// Facade owning the register path and its cache.
///
/// Each instance serves one interactive session; queries read through the
/// cache and `reload` is the only way to pick up register edits.
pub struct LookupService {
    cache: Arc<TableCache>,
}

impl LookupService {
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            cache: Arc::new(TableCache::new(source.as_ref())),
        }
    }

    /// Loads the register on first use and runs the lookup.
    pub fn lookup(&self, query: &LookupQuery) -> Result<LookupResult> {
        let table = self.cache.get_or_load()?;
        lookup(&table, query)
    }

    /// The loaded table, for callers that need the whole register.
    pub fn table(&self) -> Result<Arc<ContributionTable>> {
        Ok(self.cache.get_or_load()?)
    }

    /// Drops the cached table and reloads from disk, returning the new row
    /// count.
    pub fn reload(&self) -> Result<usize> {
        let table = self.cache.reload()?;
        Ok(table.len())
    }
}
