//! Scenario runner for batch and sensitivity projections
//!
//! Holds one projection config and fans many scenarios through it. Scenarios
//! are independent, so batches run in parallel.

use crate::error::{BlueprintError, BlueprintResult};
use crate::projection::{Projection, ProjectionConfig, ProjectionEngine};
use crate::scenario::{Scenario, GROWTH_RATE_RANGE};
use rayon::prelude::*;

/// Most rates a single sweep may produce (0.001-point resolution over the range)
pub const MAX_SWEEP_RATES: usize = 6001;

/// Runs projections for one or many scenarios with a shared config
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Same strategy at every legal growth rate, half a point apart
/// let rates = growth_rate_grid(0.5)?;
/// let results = runner.run_growth_sweep(&scenario, &rates)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with annual compounding
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific projection config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, scenario: &Scenario) -> Projection {
        self.engine.project(scenario)
    }

    /// Run projections for many scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Projection> {
        log::info!("Running batch of {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|scenario| self.engine.project(scenario))
            .collect()
    }

    /// Run one scenario at each of the given growth rates.
    ///
    /// Every rate goes back through validation; a rate outside the legal range
    /// fails the whole sweep.
    pub fn run_growth_sweep(&self, scenario: &Scenario, rates: &[f64]) -> BlueprintResult<Vec<Projection>> {
        let scenarios = rates
            .iter()
            .map(|&rate| scenario.with_growth_rate(rate))
            .collect::<BlueprintResult<Vec<_>>>()?;

        Ok(self.run_batch(&scenarios))
    }
}

/// Growth rates covering the legal range from its lower bound in steps of
/// `step` percentage points. The upper bound is included when the step lands on it.
pub fn growth_rate_grid(step: f64) -> BlueprintResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(BlueprintError::invalid("growth_rate_pct", format!("sweep step {} must be positive", step)));
    }

    let (low, high) = (*GROWTH_RATE_RANGE.start(), *GROWTH_RATE_RANGE.end());
    // Small tolerance so 3.0 + 12 * 0.5 still counts as landing on 9.0
    let steps = ((high - low) / step + 1e-9).floor();
    if steps >= MAX_SWEEP_RATES as f64 {
        return Err(BlueprintError::invalid(
            "growth_rate_pct",
            format!("sweep step {} would produce more than {} rates", step, MAX_SWEEP_RATES),
        ));
    }
    let steps = steps as usize;

    Ok((0..=steps)
        .map(|i| (low + i as f64 * step).min(high))
        .collect())
}
