//! Command-line interface definitions.

pub mod check;
pub mod lookup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(
    name = "fundlens",
    version,
    about = "Shareholder lookup over a fund contribution register"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a shareholder and print the investment summary
    Lookup {
        /// Register CSV file
        #[arg(long, default_value = "data_shareholders.csv")]
        file: PathBuf,

        /// Shareholder id: full name without diacritics plus the last
        /// 6-8 digits of the bank account, e.g. NGUYENVANABC345678
        #[arg(long)]
        id: String,

        /// Reference unit price (VND) for the base valuation
        #[arg(long, default_value = "10000")]
        price: Decimal,

        /// Alternate unit price (VND) for a what-if projection
        #[arg(long)]
        what_if: Option<Decimal>,

        /// Directory to write the two report sheets into
        #[arg(long)]
        export: Option<PathBuf>,

        /// Emit the result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Validate a register file and report row counts
    Check {
        /// Register CSV file
        #[arg(long, default_value = "data_shareholders.csv")]
        file: PathBuf,
    },
}
