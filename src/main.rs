//! Retirement Blueprint CLI
//!
//! Projects a single scenario, prints the headline metrics and the yearly
//! series, and writes the report files.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use retirement_blueprint::report::{
    format_currency, format_percent, write_report, ChartImage, CurrencyPrecision, HtmlDocument, JsonReport,
    ReportInput, SeriesCsv,
};
use retirement_blueprint::scenario::{
    DEFAULT_ANNUAL_INCOME, DEFAULT_GROWTH_RATE_PCT, DEFAULT_REPOSITION_AMOUNT, DEFAULT_RETIREMENT_YEARS,
    DEFAULT_YEARS_FUNDED,
};
use retirement_blueprint::{ProductType, ProjectionConfig, ProjectionEngine, Scenario, ScenarioInput};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "retirement_blueprint", version, about = "Calculate your potential tax-free cash flow")]
struct Cli {
    /// Annual income ($)
    #[arg(long, default_value_t = DEFAULT_ANNUAL_INCOME)]
    annual_income: f64,

    /// Amount repositioned annually ($)
    #[arg(long, default_value_t = DEFAULT_REPOSITION_AMOUNT)]
    reposition_amount: f64,

    /// Product type (Indexed UL, Variable UL, Whole Life, Guaranteed UL or IUL/VUL/WL/GUL)
    #[arg(long, default_value = "Indexed UL")]
    product: ProductType,

    /// Expected annual growth rate (%), 3.0 to 9.0
    #[arg(long, default_value_t = DEFAULT_GROWTH_RATE_PCT)]
    growth_rate: f64,

    /// Years of contributions, 5 to 30
    #[arg(long, default_value_t = DEFAULT_YEARS_FUNDED)]
    years_funded: u32,

    /// Years of retirement income, 10 to 40
    #[arg(long, default_value_t = DEFAULT_RETIREMENT_YEARS)]
    retirement_years: u32,

    /// Clamp out-of-range inputs instead of rejecting them
    #[arg(long)]
    clamp: bool,

    /// Compound the yearly series monthly
    #[arg(long)]
    monthly: bool,

    /// Pre-rendered chart image to embed in the document
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Directory for the report files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write the full projection as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn scenario(&self) -> Result<Scenario> {
        let mut input = ScenarioInput {
            annual_income: self.annual_income,
            reposition_amount: self.reposition_amount,
            product: self.product,
            growth_rate_pct: self.growth_rate,
            years_funded: self.years_funded,
            retirement_years: self.retirement_years,
        };
        if self.clamp {
            input = input.clamped();
        }
        Scenario::try_from(input).context("Scenario rejected, adjust the inputs and try again")
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Private Retirement Blueprint");
    println!("============================\n");

    let scenario = cli.scenario()?;
    let config = if cli.monthly {
        ProjectionConfig::monthly()
    } else {
        ProjectionConfig::default()
    };

    let engine = ProjectionEngine::new(config);
    let projection = engine.project(&scenario);
    let whole = |v: f64| format_currency(v, CurrencyPrecision::Whole);

    println!("Scenario:");
    println!("  Product: {}", scenario.product());
    println!("  Annual Income: {}", whole(scenario.annual_income()));
    println!("  Repositioned Annually: {}", whole(scenario.reposition_amount()));
    println!("  Growth Rate: {}", format_percent(scenario.growth_rate_pct()));
    println!("  Years Funded: {}", scenario.years_funded());
    println!("  Retirement Years: {}", scenario.retirement_years());
    println!();

    println!("Results:");
    println!("  Total Contributions: {}", whole(projection.summary.total_contributions));
    println!("  Projected Tax-Free Capital: {}", whole(projection.summary.future_value));
    println!("  Estimated Annual Tax-Free Income: {}", whole(projection.summary.estimated_annual_income));
    println!();

    println!("Yearly Series ({:?} compounding):", projection.granularity);
    println!("{:>5} {:>16} {:>16} {:>9}", "Year", "Capital", "Contributions", "ROI");
    println!("{}", "-".repeat(49));
    for row in &projection.series {
        println!(
            "{:>5} {:>16} {:>16} {:>9}",
            row.year,
            whole(row.capital),
            whole(row.cumulative_contributions),
            format_percent(row.roi_percent),
        );
    }
    println!();

    let chart = cli
        .chart
        .as_ref()
        .map(ChartImage::from_path)
        .transpose()
        .context("Unable to load chart image")?;

    let mut input = ReportInput::new(&projection, Local::now().date_naive());
    input.chart = chart.as_ref();

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Unable to create {}", cli.output_dir.display()))?;

    let document = write_report(&HtmlDocument, &input, &cli.output_dir).context("Unable to write document")?;
    let series = write_report(&SeriesCsv, &input, &cli.output_dir).context("Unable to write series CSV")?;
    println!("Document written to: {}", document.display());
    println!("Series written to: {}", series.display());

    if cli.json {
        let json = write_report(&JsonReport, &input, &cli.output_dir).context("Unable to write JSON")?;
        println!("Projection written to: {}", json.display());
    }

    Ok(())
}
