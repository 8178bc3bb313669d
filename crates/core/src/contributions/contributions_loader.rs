//! Loads the contribution register from disk into a `ContributionTable`.
//!
//! The register mixes primary transaction rows with subordinate detail rows
//! belonging to the same transfer; only primary rows become records. Cell
//! cleaning is tolerant (bad numeric cells become zero, bad dates become
//! null) while structural problems fail the whole load.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use super::contributions_errors::LoadError;
use super::contributions_model::{
    parse_date_or_none, parse_decimal_or_default, ContributionRecord, ContributionTable,
};
use super::csv_parser::{decode_bytes, parse_rows};
use crate::constants::*;

/// Reads and parses the register file at `path`.
pub fn load_contributions(path: &Path) -> Result<ContributionTable, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.display().to_string()))
        }
        Err(err) => return Err(err.into()),
    };
    let table = parse_contributions(&bytes)?;
    debug!(
        "loaded {} contribution rows from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parses raw register bytes into a table of primary contribution rows.
pub fn parse_contributions(bytes: &[u8]) -> Result<ContributionTable, LoadError> {
    let text = decode_bytes(bytes);
    let raw = parse_rows(&text)?;

    let records: Vec<ContributionRecord> = raw
        .rows
        .iter()
        .filter(|row| is_primary_row(row))
        .map(|row| build_record(row))
        .collect();

    if records.is_empty() {
        return Err(LoadError::NoValidRows);
    }

    Ok(ContributionTable::new(records))
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// A row is a primary transaction only when the date, amount, and both
/// identity cells are filled in, and the date cell does not carry the `-`
/// prefix marking subordinate detail rows.
fn is_primary_row(row: &[String]) -> bool {
    let date = cell(row, COL_DATE).trim();
    !date.is_empty()
        && !date.starts_with('-')
        && !cell(row, COL_AMOUNT).trim().is_empty()
        && !cell(row, COL_SHAREHOLDER_NAME).trim().is_empty()
        && !cell(row, COL_SHAREHOLDER_ID).trim().is_empty()
}

fn build_record(row: &[String]) -> ContributionRecord {
    let date_raw = cell(row, COL_DATE).trim().to_string();
    ContributionRecord {
        date: parse_date_or_none(&date_raw),
        amount: parse_decimal_or_default(cell(row, COL_AMOUNT)),
        unit_price: parse_decimal_or_default(cell(row, COL_UNIT_PRICE)),
        units: parse_decimal_or_default(cell(row, COL_UNIT_QUANTITY)),
        bank: cell(row, COL_BANK).trim().to_string(),
        account: cell(row, COL_ACCOUNT).trim().to_string(),
        category: cell(row, COL_CATEGORY).trim().to_string(),
        content: cell(row, COL_CONTENT).trim().to_string(),
        shareholder_name: cell(row, COL_SHAREHOLDER_NAME).trim().to_string(),
        shareholder_id: cell(row, COL_SHAREHOLDER_ID).trim().to_string(),
        date_raw,
    }
}
