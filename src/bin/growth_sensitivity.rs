//! Sweep the expected growth rate across its legal range for one scenario

use anyhow::{Context, Result};
use clap::Parser;
use retirement_blueprint::report::{format_currency, CurrencyPrecision};
use retirement_blueprint::scenario::{
    DEFAULT_ANNUAL_INCOME, DEFAULT_REPOSITION_AMOUNT, DEFAULT_RETIREMENT_YEARS, DEFAULT_YEARS_FUNDED,
};
use retirement_blueprint::{growth_rate_grid, ProductType, ProjectionConfig, Scenario, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "growth_sensitivity", about = "Project one scenario across the growth-rate range")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_ANNUAL_INCOME)]
    annual_income: f64,

    #[arg(long, default_value_t = DEFAULT_REPOSITION_AMOUNT)]
    reposition_amount: f64,

    #[arg(long, default_value = "Indexed UL")]
    product: ProductType,

    #[arg(long, default_value_t = DEFAULT_YEARS_FUNDED)]
    years_funded: u32,

    #[arg(long, default_value_t = DEFAULT_RETIREMENT_YEARS)]
    retirement_years: u32,

    /// Step between growth rates, in percentage points
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// Compound the yearly series monthly
    #[arg(long)]
    monthly: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rates = growth_rate_grid(args.step)?;
    // Any legal rate works as the base; the sweep overrides it
    let base = Scenario::new(
        args.annual_income,
        args.reposition_amount,
        args.product,
        rates[0],
        args.years_funded,
        args.retirement_years,
    )
    .context("Scenario rejected")?;

    let config = if args.monthly {
        ProjectionConfig::monthly()
    } else {
        ProjectionConfig::default()
    };
    let results = ScenarioRunner::with_config(config).run_growth_sweep(&base, &rates)?;

    let whole = |v: f64| format_currency(v, CurrencyPrecision::Whole);
    println!("{:>7} {:>18} {:>16} {:>18}", "Growth", "Tax-Free Capital", "Annual Income", "Final Capital");
    println!("{}", "-".repeat(62));
    for projection in &results {
        println!(
            "{:>6.2}% {:>18} {:>16} {:>18}",
            projection.scenario.growth_rate_pct(),
            whole(projection.summary.future_value),
            whole(projection.summary.estimated_annual_income),
            whole(projection.series.final_capital()),
        );
    }

    Ok(())
}
