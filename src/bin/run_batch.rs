//! Run projections for every scenario in a CSV or JSON file
//!
//! Outputs one summary row per scenario for side-by-side comparison

use anyhow::{Context, Result};
use clap::Parser;
use retirement_blueprint::projection::round_to_cents;
use retirement_blueprint::scenario::load_scenarios;
use retirement_blueprint::{ProjectionConfig, ScenarioRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project a batch of scenarios")]
struct Args {
    /// Scenario file (.csv with AnnualIncome,RepositionAmount,Product,GrowthRatePct,YearsFunded,RetirementYears or .json)
    scenarios: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Compound the yearly series monthly
    #[arg(long)]
    monthly: bool,
}

/// One output row per scenario
#[derive(Debug, Serialize)]
struct BatchRow {
    #[serde(rename = "Row")]
    row: usize,
    #[serde(rename = "Product")]
    product: &'static str,
    #[serde(rename = "TotalContributions")]
    total_contributions: f64,
    #[serde(rename = "FutureValue")]
    future_value: f64,
    #[serde(rename = "EstimatedAnnualIncome")]
    estimated_annual_income: f64,
    #[serde(rename = "FinalCapital")]
    final_capital: f64,
    #[serde(rename = "FinalRoiPercent")]
    final_roi_percent: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let config = if args.monthly {
        ProjectionConfig::monthly()
    } else {
        ProjectionConfig::default()
    };
    let runner = ScenarioRunner::with_config(config);

    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    for (idx, projection) in results.iter().enumerate() {
        let final_row = projection.series.final_row();
        writer.serialize(BatchRow {
            row: idx + 1,
            product: projection.scenario.product().as_str(),
            total_contributions: round_to_cents(projection.summary.total_contributions),
            future_value: round_to_cents(projection.summary.future_value),
            estimated_annual_income: round_to_cents(projection.summary.estimated_annual_income),
            final_capital: round_to_cents(final_row.map(|r| r.capital).unwrap_or(0.0)),
            final_roi_percent: final_row.map(|r| r.roi_percent).unwrap_or(0.0),
        })?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
