//! Contribution register - domain models, CSV loading, and caching.

mod cache;
mod contributions_errors;
mod contributions_loader;
mod contributions_model;
mod csv_parser;

#[cfg(test)]
mod contributions_loader_tests;

pub use cache::TableCache;
pub use contributions_errors::LoadError;
pub use contributions_loader::{load_contributions, parse_contributions};
pub use contributions_model::{
    parse_date_or_none, parse_decimal_or_default, ContributionRecord, ContributionTable,
};
pub use csv_parser::{decode_bytes, parse_rows, RawTable};
