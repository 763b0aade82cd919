//! Load scenario batches from CSV or JSON files

use super::{ProductType, Scenario, ScenarioInput};
use crate::error::{BlueprintError, BlueprintResult};
use csv::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw CSV row matching the scenario batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "RepositionAmount")]
    reposition_amount: f64,
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "GrowthRatePct")]
    growth_rate_pct: f64,
    #[serde(rename = "YearsFunded")]
    years_funded: u32,
    #[serde(rename = "RetirementYears")]
    retirement_years: u32,
}

impl CsvRow {
    fn into_input(self) -> BlueprintResult<ScenarioInput> {
        let product: ProductType = self
            .product
            .parse()
            .map_err(|_| BlueprintError::invalid("product", format!("unknown product '{}'", self.product)))?;

        Ok(ScenarioInput {
            annual_income: self.annual_income,
            reposition_amount: self.reposition_amount,
            product,
            growth_rate_pct: self.growth_rate_pct,
            years_funded: self.years_funded,
            retirement_years: self.retirement_years,
        })
    }
}

/// Attach a 1-indexed data row number to a validation failure
fn at_row(row: usize, err: BlueprintError) -> BlueprintError {
    match err {
        BlueprintError::InvalidScenario { field, reason } => BlueprintError::InvalidScenario {
            field,
            reason: format!("{} (row {})", reason, row),
        },
        other => other,
    }
}

/// Load raw scenario inputs from CSV without validating them
pub fn load_inputs_from_reader<R: Read>(reader: R) -> BlueprintResult<Vec<ScenarioInput>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut inputs = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        inputs.push(row.into_input().map_err(|e| at_row(idx + 1, e))?);
    }

    Ok(inputs)
}

/// Load and validate scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> BlueprintResult<Vec<Scenario>> {
    validate_all(load_inputs_from_reader(reader)?)
}

/// Load and validate scenarios from a JSON array of scenario objects
pub fn load_scenarios_from_json_reader<R: Read>(reader: R) -> BlueprintResult<Vec<Scenario>> {
    let inputs: Vec<ScenarioInput> = serde_json::from_reader(reader)?;
    validate_all(inputs)
}

/// Load scenarios from a `.csv` or `.json` file, chosen by extension
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> BlueprintResult<Vec<Scenario>> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let scenarios = if is_json {
        load_scenarios_from_json_reader(file)?
    } else {
        load_scenarios_from_reader(file)?
    };

    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

fn validate_all(inputs: Vec<ScenarioInput>) -> BlueprintResult<Vec<Scenario>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(idx, input)| Scenario::try_from(input).map_err(|e| at_row(idx + 1, e)))
        .collect()
}
