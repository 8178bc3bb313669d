//! The `lookup` subcommand: summary, history, what-if, and report export.

use std::path::Path;

use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use rust_decimal::Decimal;

use fundlens_core::lookup::{
    build_report, write_report_files, LookupQuery, LookupResult, LookupService,
    ShareholderSummary,
};
use fundlens_core::metrics::WhatIfProjection;

use crate::fmt;

pub fn run(
    file: &Path,
    id: &str,
    price: Decimal,
    what_if: Option<Decimal>,
    export: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let service = LookupService::new(file);
    let query = LookupQuery::new(id.trim().to_uppercase(), price);
    let result = service
        .lookup(&query)
        .with_context(|| format!("looking up '{}' in {}", id, file.display()))?;

    if json {
        let projection = match (&result, what_if) {
            (LookupResult::Found(summary), Some(alt)) => Some(summary.project(alt)),
            _ => None,
        };
        let payload = serde_json::json!({ "result": &result, "whatIf": projection });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match result {
        LookupResult::NotFound { shareholder_id } => {
            println!("No contributions found for id '{shareholder_id}'.");
            println!();
            println!("Check the id format: full name without diacritics plus the");
            println!("last 6-8 digits of the bank account, e.g. NGUYENVANABC345678.");
            Ok(())
        }
        LookupResult::Found(summary) => {
            print_summary(&summary);
            print_history(&summary);
            if let Some(alt) = what_if {
                print_projection(&summary.project(alt));
            }
            if let Some(dir) = export {
                let report = build_report(&summary);
                let paths = write_report_files(&report, dir, &summary.shareholder_id)
                    .with_context(|| format!("writing report to {}", dir.display()))?;
                for path in &paths {
                    println!("Wrote {}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn print_summary(summary: &ShareholderSummary) {
    println!(
        "Hello, {}! Investment summary for {}:",
        summary.shareholder_name, summary.shareholder_id
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Total investment".to_string(),
        format!("{} VND", fmt::vnd(summary.total_investment)),
    ]);
    table.add_row(vec![
        "Total units held".to_string(),
        fmt::units(summary.total_units),
    ]);
    table.add_row(vec![
        format!("NAV at {} VND", fmt::vnd(summary.base.unit_price)),
        format!("{} VND", fmt::vnd(summary.base.nav)),
    ]);
    table.add_row(vec![
        "Performance".to_string(),
        fmt::pct(summary.base.performance_pct),
    ]);
    table.add_row(vec![
        "Transactions".to_string(),
        summary.transaction_count.to_string(),
    ]);
    if let Some(first) = summary.first_date {
        table.add_row(vec![
            "First transfer".to_string(),
            first.format("%d/%m/%Y").to_string(),
        ]);
    }
    if let Some(last) = summary.last_date {
        table.add_row(vec![
            "Latest transfer".to_string(),
            last.format("%d/%m/%Y").to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_history(summary: &ShareholderSummary) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Date",
        "Amount",
        "Unit price",
        "Units",
        "Cum. amount",
        "Cum. units",
        "Avg price",
    ]);
    for (record, point) in summary.records.iter().zip(&summary.series) {
        let date = point
            .date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            date,
            fmt::vnd(point.amount),
            fmt::vnd(record.unit_price),
            fmt::units(point.units),
            fmt::vnd(point.cumulative_amount),
            fmt::units(point.cumulative_units),
            fmt::vnd(point.average_unit_price),
        ]);
    }
    println!("Contribution history:");
    println!("{table}");
    println!();
}

fn print_projection(projection: &WhatIfProjection) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Base", "What-if"]);
    table.add_row(vec![
        "Unit price".to_string(),
        format!("{} VND", fmt::vnd(projection.base.unit_price)),
        format!("{} VND", fmt::vnd(projection.hypothetical.unit_price)),
    ]);
    table.add_row(vec![
        "NAV".to_string(),
        format!("{} VND", fmt::vnd(projection.base.nav)),
        format!("{} VND", fmt::vnd(projection.hypothetical.nav)),
    ]);
    table.add_row(vec![
        "Performance".to_string(),
        fmt::pct(projection.base.performance_pct),
        fmt::pct(projection.hypothetical.performance_pct),
    ]);
    println!("What-if projection:");
    println!("{table}");
    println!(
        "NAV delta: {} VND, performance delta: {}",
        fmt::vnd(projection.nav_delta),
        fmt::pct(projection.performance_delta)
    );
    println!();
}
