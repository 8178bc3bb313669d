//! Two-sheet report export for a shareholder summary.
//!
//! Sheet one lists the transactions, sheet two the aggregates. The transform
//! is deliberately thin: every derived number comes from the summary, so the
//! sheets cannot drift from what the lookup showed.

use std::fs;
use std::path::{Path, PathBuf};

use super::lookup_model::ShareholderSummary;
use crate::errors::{Error, Result};

pub const TRANSACTIONS_SHEET: &str = "transactions";
pub const SUMMARY_SHEET: &str = "summary";

const TRANSACTION_HEADERS: [&str; 5] = [
    "Transfer date",
    "Amount (VND)",
    "Unit price (VND)",
    "Units",
    "Bank",
];
const SUMMARY_HEADERS: [&str; 2] = ["Item", "Value"];

/// One tabular sheet of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSheet {
    /// Serializes the sheet as CSV.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .map_err(|e| Error::Report(e.to_string()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| Error::Report(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Report(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::Report(e.to_string()))
    }
}

/// Report for one shareholder: transaction detail plus summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub detail: ReportSheet,
    pub summary: ReportSheet,
}

/// Assembles the two report sheets from a lookup summary.
pub fn build_report(summary: &ShareholderSummary) -> Report {
    let detail_rows: Vec<Vec<String>> = summary
        .records
        .iter()
        .map(|r| {
            vec![
                r.date_raw.clone(),
                r.amount.to_string(),
                r.unit_price.to_string(),
                r.units.to_string(),
                r.bank.clone(),
            ]
        })
        .collect();

    let summary_rows = vec![
        vec![
            "Shareholder name".to_string(),
            summary.shareholder_name.clone(),
        ],
        vec![
            "Total investment (VND)".to_string(),
            summary.total_investment.to_string(),
        ],
        vec![
            "Total units held".to_string(),
            summary.total_units.to_string(),
        ],
        vec![
            "Transaction count".to_string(),
            summary.transaction_count.to_string(),
        ],
    ];

    Report {
        detail: ReportSheet {
            name: TRANSACTIONS_SHEET.to_string(),
            headers: TRANSACTION_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: detail_rows,
        },
        summary: ReportSheet {
            name: SUMMARY_SHEET.to_string(),
            headers: SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: summary_rows,
        },
    }
}

/// Writes both sheets as `<stem>_<sheet>.csv` under `dir`, returning the
/// written paths in sheet order.
pub fn write_report_files(report: &Report, dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::Report(e.to_string()))?;

    let mut written = Vec::with_capacity(2);
    for sheet in [&report.detail, &report.summary] {
        let path = dir.join(format!("{}_{}.csv", stem, sheet.name));
        fs::write(&path, sheet.to_csv()?).map_err(|e| Error::Report(e.to_string()))?;
        written.push(path);
    }
    Ok(written)
}
