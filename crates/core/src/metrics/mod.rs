//! Investment metric calculations - pure functions, no side effects.

mod calculator;
mod metrics_model;

pub use calculator::{cumulative_series, net_asset_value, performance_pct};
pub use metrics_model::{CumulativePoint, Scenario, WhatIfProjection};
