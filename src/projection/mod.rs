//! Projection engine: summary metrics and the yearly accumulation series

mod state;
mod series;
mod summary;
mod engine;

pub use state::{AccumulationState, round_to_cents};
pub use series::{YearRow, YearlySeries};
pub use summary::{compute_summary, SummaryResult};
pub use engine::{compute_series, Granularity, Projection, ProjectionConfig, ProjectionEngine};
