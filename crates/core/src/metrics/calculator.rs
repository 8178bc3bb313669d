//! Pure metric functions over contribution records.

use rust_decimal::Decimal;

use super::metrics_model::CumulativePoint;
use crate::contributions::ContributionRecord;

/// Net asset value: units held times the unit price.
pub fn net_asset_value(total_units: Decimal, unit_price: Decimal) -> Decimal {
    total_units * unit_price
}

/// Performance of an investment as a percentage.
///
/// `(nav / investment - 1) * 100` when anything was invested. Defined as
/// zero for a zero investment, so callers never see a division error for
/// shareholders with no recorded money.
pub fn performance_pct(nav: Decimal, investment: Decimal) -> Decimal {
    if investment > Decimal::ZERO {
        (nav / investment - Decimal::ONE) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Running contribution totals over date-ordered records.
///
/// The average unit price at each point is the cumulative amount divided by
/// cumulative units, zero while no units are held yet.
pub fn cumulative_series(records: &[ContributionRecord]) -> Vec<CumulativePoint> {
    let mut cumulative_amount = Decimal::ZERO;
    let mut cumulative_units = Decimal::ZERO;

    records
        .iter()
        .map(|record| {
            cumulative_amount += record.amount;
            cumulative_units += record.units;
            let average_unit_price = if cumulative_units > Decimal::ZERO {
                cumulative_amount / cumulative_units
            } else {
                Decimal::ZERO
            };
            CumulativePoint {
                date: record.date,
                amount: record.amount,
                units: record.units,
                cumulative_amount,
                cumulative_units,
                average_unit_price,
            }
        })
        .collect()
}
