//! Core projection engine for the yearly accumulation series

use super::series::{YearRow, YearlySeries};
use super::state::AccumulationState;
use super::summary::{compute_summary, SummaryResult};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Months per year for the monthly granularity
const MONTHS_PER_YEAR: u32 = 12;

/// Compounding granularity of the yearly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Granularity {
    /// One deposit and one growth step per year
    #[default]
    Annual,
    /// Twelve deposits of 1/12 of the annual amount, growing at rate/12 per month
    Monthly,
}

/// Configuration for a projection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Compounding granularity for the yearly series
    pub granularity: Granularity,
}

impl ProjectionConfig {
    pub fn monthly() -> Self {
        Self {
            granularity: Granularity::Monthly,
        }
    }
}

/// Everything computed for one scenario, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub scenario: Scenario,
    pub granularity: Granularity,
    pub summary: SummaryResult,
    pub series: YearlySeries,
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Compute summary metrics and the yearly series for a scenario
    pub fn project(&self, scenario: &Scenario) -> Projection {
        let summary = compute_summary(scenario);
        let series = self.series(scenario);

        log::debug!(
            "Projected {} ({:?}): contributions={:.2} future_value={:.2} income={:.2} final_capital={:.2}",
            scenario.product(),
            self.config.granularity,
            summary.total_contributions,
            summary.future_value,
            summary.estimated_annual_income,
            series.final_capital(),
        );

        Projection {
            scenario: scenario.clone(),
            granularity: self.config.granularity,
            summary,
            series,
        }
    }

    /// Compute the yearly series for a scenario.
    ///
    /// One row per year from 1 through `years_funded + retirement_years`, in
    /// increasing order. Each year's state depends on the previous one.
    pub fn series(&self, scenario: &Scenario) -> YearlySeries {
        let years = scenario.horizon_years();
        let mut series = YearlySeries::with_capacity(years as usize);
        let mut state = AccumulationState::new();

        for year in 1..=years {
            let contribution = scenario.contribution_for_year(year);

            match self.config.granularity {
                Granularity::Annual => {
                    state.deposit_and_grow(contribution, 1.0 + scenario.annual_rate());
                }
                Granularity::Monthly => {
                    let monthly_growth = 1.0 + scenario.annual_rate() / MONTHS_PER_YEAR as f64;
                    let monthly_deposit = contribution / MONTHS_PER_YEAR as f64;
                    for _month in 1..=MONTHS_PER_YEAR {
                        state.deposit_and_grow(monthly_deposit, monthly_growth);
                    }
                }
            }
            state.close_year();

            series.add_row(YearRow {
                year: state.year,
                capital: state.capital,
                cumulative_contributions: state.cumulative_contributions,
                roi_percent: state.roi_percent(),
            });
        }

        series
    }
}

/// Yearly series with annual compounding
pub fn compute_series(scenario: &Scenario) -> YearlySeries {
    ProjectionEngine::default().series(scenario)
}
