//! Closed-form summary metrics
//!
//! The summary uses a deliberately simplified growth model: the undiscounted
//! total of all contributions is compounded in a single step over the gap
//! between the funding period and the retirement horizon. It does not compound
//! each contribution from its own deposit year, so it will not reconcile with
//! the yearly series in `engine`, which compounds year by year.

use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Headline metrics for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Reposition amount times funded years
    pub total_contributions: f64,

    /// Projected tax-free capital
    pub future_value: f64,

    /// Future value spread evenly over the retirement years
    pub estimated_annual_income: f64,
}

/// Compute the summary metrics for a validated scenario.
///
/// `retirement_years < years_funded` gives a negative exponent and a future
/// value below total contributions. That is a valid (if degenerate) result.
pub fn compute_summary(scenario: &Scenario) -> SummaryResult {
    let total_contributions = scenario.reposition_amount() * scenario.years_funded() as f64;

    let exponent = scenario.retirement_years() as i32 - scenario.years_funded() as i32;
    let future_value = total_contributions * (1.0 + scenario.annual_rate()).powi(exponent);

    // retirement_years >= 1 for every validated scenario
    let estimated_annual_income = future_value / scenario.retirement_years() as f64;

    SummaryResult {
        total_contributions,
        future_value,
        estimated_annual_income,
    }
}
