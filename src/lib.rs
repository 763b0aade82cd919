//! Retirement Blueprint - projection engine for life-insurance funding strategies
//!
//! This library provides:
//! - Scenario validation at the input boundary (ranges, non-negative amounts)
//! - Closed-form summary metrics (total contributions, projected capital, annual income)
//! - A year-by-year accumulation series with ROI, at annual or monthly granularity
//! - Batch and growth-rate sensitivity runs
//! - Report exports (one-page HTML document, series CSV, projection JSON)
//!
//! The summary metrics and the yearly series use two different growth models
//! and are not meant to reconcile; see `projection::compute_summary`.

pub mod error;
pub mod scenario;
pub mod projection;
pub mod runner;
pub mod report;

// Re-export commonly used types
pub use error::{BlueprintError, BlueprintResult};
pub use scenario::{ProductType, Scenario, ScenarioInput};
pub use projection::{
    compute_series, compute_summary, Granularity, Projection, ProjectionConfig, ProjectionEngine,
    SummaryResult, YearRow, YearlySeries,
};
pub use runner::{growth_rate_grid, ScenarioRunner};
