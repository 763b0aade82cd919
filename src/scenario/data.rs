//! Scenario data structures and input-boundary validation

use crate::error::{BlueprintError, BlueprintResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Legal range for the expected annual growth rate (percent)
pub const GROWTH_RATE_RANGE: RangeInclusive<f64> = 3.0..=9.0;

/// Legal range for the number of funded years
pub const YEARS_FUNDED_RANGE: RangeInclusive<u32> = 5..=30;

/// Legal range for the number of retirement income years
pub const RETIREMENT_YEARS_RANGE: RangeInclusive<u32> = 10..=40;

pub const DEFAULT_ANNUAL_INCOME: f64 = 250_000.0;
pub const DEFAULT_REPOSITION_AMOUNT: f64 = 50_000.0;
pub const DEFAULT_GROWTH_RATE_PCT: f64 = 6.0;
pub const DEFAULT_YEARS_FUNDED: u32 = 15;
pub const DEFAULT_RETIREMENT_YEARS: u32 = 25;

/// Life-insurance product used to hold the repositioned capital.
///
/// The product is a label only: every product projects with the same
/// arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Indexed universal life
    #[default]
    #[serde(rename = "Indexed UL", alias = "IndexedUL", alias = "IUL")]
    IndexedUL,
    /// Variable universal life
    #[serde(rename = "Variable UL", alias = "VariableUL", alias = "VUL")]
    VariableUL,
    /// Whole life
    #[serde(rename = "Whole Life", alias = "WholeLife", alias = "WL")]
    WholeLife,
    /// Guaranteed universal life
    #[serde(rename = "Guaranteed UL", alias = "GuaranteedUL", alias = "GUL")]
    GuaranteedUL,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::IndexedUL,
        ProductType::VariableUL,
        ProductType::WholeLife,
        ProductType::GuaranteedUL,
    ];

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::IndexedUL => "Indexed UL",
            ProductType::VariableUL => "Variable UL",
            ProductType::WholeLife => "Whole Life",
            ProductType::GuaranteedUL => "Guaranteed UL",
        }
    }

    /// Short code used in product literature
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::IndexedUL => "IUL",
            ProductType::VariableUL => "VUL",
            ProductType::WholeLife => "WL",
            ProductType::GuaranteedUL => "GUL",
        }
    }

    /// One-line description of what the product emphasizes
    pub fn highlight(&self) -> &'static str {
        match self {
            ProductType::IndexedUL => "Growth tied to an index, downside floor",
            ProductType::VariableUL => "Investment-driven with subaccount options",
            ProductType::WholeLife => "Guarantees + dividends",
            ProductType::GuaranteedUL => "Low cash value, high death benefit",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = BlueprintError;

    /// Accepts the display label, the enum name or the short code, ignoring
    /// case, whitespace, underscores and hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "indexedul" | "iul" => Ok(ProductType::IndexedUL),
            "variableul" | "vul" => Ok(ProductType::VariableUL),
            "wholelife" | "wl" => Ok(ProductType::WholeLife),
            "guaranteedul" | "gul" => Ok(ProductType::GuaranteedUL),
            _ => Err(BlueprintError::UnknownProduct(s.to_string())),
        }
    }
}

/// Raw scenario parameters as entered by the user, before validation.
///
/// Nothing is guaranteed about these values. Convert with
/// `Scenario::try_from` (reject) or `clamped()` followed by `try_from`
/// (slider semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Annual household income (informational)
    pub annual_income: f64,

    /// Amount repositioned into the policy each funded year
    pub reposition_amount: f64,

    /// Product type label
    #[serde(default)]
    pub product: ProductType,

    /// Expected annual growth rate in percent (6.0 = 6%)
    pub growth_rate_pct: f64,

    /// Number of years contributions are made
    pub years_funded: u32,

    /// Number of years of retirement income, measured from the same origin
    pub retirement_years: u32,
}

impl ScenarioInput {
    /// Pull every field into its legal range the way an input slider would.
    ///
    /// Negative or NaN currency becomes 0. Infinite values survive and are
    /// still rejected by validation.
    pub fn clamped(&self) -> Self {
        Self {
            annual_income: self.annual_income.max(0.0),
            reposition_amount: self.reposition_amount.max(0.0),
            product: self.product,
            growth_rate_pct: self
                .growth_rate_pct
                .clamp(*GROWTH_RATE_RANGE.start(), *GROWTH_RATE_RANGE.end()),
            years_funded: self
                .years_funded
                .clamp(*YEARS_FUNDED_RANGE.start(), *YEARS_FUNDED_RANGE.end()),
            retirement_years: self
                .retirement_years
                .clamp(*RETIREMENT_YEARS_RANGE.start(), *RETIREMENT_YEARS_RANGE.end()),
        }
    }

    /// Check every constraint, reporting the first violation
    pub fn validate(&self) -> BlueprintResult<()> {
        // Checked first so the division-by-zero case gets its own message
        if self.retirement_years == 0 {
            return Err(BlueprintError::invalid(
                "retirement_years",
                "must be greater than 0 (annual income divides by it)",
            ));
        }

        check_currency("annual_income", self.annual_income)?;
        check_currency("reposition_amount", self.reposition_amount)?;

        if !self.growth_rate_pct.is_finite() || !GROWTH_RATE_RANGE.contains(&self.growth_rate_pct) {
            return Err(BlueprintError::invalid(
                "growth_rate_pct",
                format!(
                    "{} is outside [{}, {}]",
                    self.growth_rate_pct,
                    GROWTH_RATE_RANGE.start(),
                    GROWTH_RATE_RANGE.end()
                ),
            ));
        }

        if !YEARS_FUNDED_RANGE.contains(&self.years_funded) {
            return Err(BlueprintError::invalid(
                "years_funded",
                format!(
                    "{} is outside [{}, {}]",
                    self.years_funded,
                    YEARS_FUNDED_RANGE.start(),
                    YEARS_FUNDED_RANGE.end()
                ),
            ));
        }

        if !RETIREMENT_YEARS_RANGE.contains(&self.retirement_years) {
            return Err(BlueprintError::invalid(
                "retirement_years",
                format!(
                    "{} is outside [{}, {}]",
                    self.retirement_years,
                    RETIREMENT_YEARS_RANGE.start(),
                    RETIREMENT_YEARS_RANGE.end()
                ),
            ));
        }

        Ok(())
    }
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            annual_income: DEFAULT_ANNUAL_INCOME,
            reposition_amount: DEFAULT_REPOSITION_AMOUNT,
            product: ProductType::IndexedUL,
            growth_rate_pct: DEFAULT_GROWTH_RATE_PCT,
            years_funded: DEFAULT_YEARS_FUNDED,
            retirement_years: DEFAULT_RETIREMENT_YEARS,
        }
    }
}

fn check_currency(field: &'static str, value: f64) -> BlueprintResult<()> {
    if !value.is_finite() {
        return Err(BlueprintError::invalid(field, format!("{} is not a finite amount", value)));
    }
    if value < 0.0 {
        return Err(BlueprintError::invalid(field, format!("{} is negative", value)));
    }
    Ok(())
}

/// A validated funding strategy.
///
/// Only constructible through validation, so every `Scenario` satisfies the
/// range constraints and the projection engine never has to fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioInput")]
pub struct Scenario {
    annual_income: f64,
    reposition_amount: f64,
    product: ProductType,
    growth_rate_pct: f64,
    years_funded: u32,
    retirement_years: u32,
}

impl Scenario {
    /// Validate and build a scenario
    pub fn new(
        annual_income: f64,
        reposition_amount: f64,
        product: ProductType,
        growth_rate_pct: f64,
        years_funded: u32,
        retirement_years: u32,
    ) -> BlueprintResult<Self> {
        Self::try_from(ScenarioInput {
            annual_income,
            reposition_amount,
            product,
            growth_rate_pct,
            years_funded,
            retirement_years,
        })
    }

    pub fn annual_income(&self) -> f64 {
        self.annual_income
    }

    pub fn reposition_amount(&self) -> f64 {
        self.reposition_amount
    }

    pub fn product(&self) -> ProductType {
        self.product
    }

    pub fn growth_rate_pct(&self) -> f64 {
        self.growth_rate_pct
    }

    pub fn years_funded(&self) -> u32 {
        self.years_funded
    }

    pub fn retirement_years(&self) -> u32 {
        self.retirement_years
    }

    /// Annual growth as a decimal (6.0% -> 0.06)
    pub fn annual_rate(&self) -> f64 {
        self.growth_rate_pct / 100.0
    }

    /// Length of the yearly series: funding years plus retirement years
    pub fn horizon_years(&self) -> u32 {
        self.years_funded + self.retirement_years
    }

    /// Contribution made in a given year (1-indexed)
    pub fn contribution_for_year(&self, year: u32) -> f64 {
        if year >= 1 && year <= self.years_funded {
            self.reposition_amount
        } else {
            0.0
        }
    }

    /// Copy of this scenario with a different growth rate, re-validated
    pub fn with_growth_rate(&self, growth_rate_pct: f64) -> BlueprintResult<Self> {
        let mut input = ScenarioInput::from(self.clone());
        input.growth_rate_pct = growth_rate_pct;
        Self::try_from(input)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            annual_income: DEFAULT_ANNUAL_INCOME,
            reposition_amount: DEFAULT_REPOSITION_AMOUNT,
            product: ProductType::IndexedUL,
            growth_rate_pct: DEFAULT_GROWTH_RATE_PCT,
            years_funded: DEFAULT_YEARS_FUNDED,
            retirement_years: DEFAULT_RETIREMENT_YEARS,
        }
    }
}

impl TryFrom<ScenarioInput> for Scenario {
    type Error = BlueprintError;

    fn try_from(input: ScenarioInput) -> Result<Self, Self::Error> {
        input.validate()?;
        Ok(Self {
            annual_income: input.annual_income,
            reposition_amount: input.reposition_amount,
            product: input.product,
            growth_rate_pct: input.growth_rate_pct,
            years_funded: input.years_funded,
            retirement_years: input.retirement_years,
        })
    }
}

impl From<Scenario> for ScenarioInput {
    fn from(scenario: Scenario) -> Self {
        Self {
            annual_income: scenario.annual_income,
            reposition_amount: scenario.reposition_amount,
            product: scenario.product,
            growth_rate_pct: scenario.growth_rate_pct,
            years_funded: scenario.years_funded,
            retirement_years: scenario.retirement_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ScenarioInput {
        ScenarioInput::default()
    }

    #[test]
    fn test_default_scenario_is_valid() {
        let scenario = Scenario::try_from(input()).unwrap();
        assert_eq!(scenario, Scenario::default());
        assert_eq!(scenario.horizon_years(), 40);
    }

    #[test]
    fn test_zero_retirement_years_rejected() {
        let mut raw = input();
        raw.retirement_years = 0;

        let err = Scenario::try_from(raw).unwrap_err();
        assert!(err.is_invalid_scenario());
        assert!(err.to_string().contains("retirement_years"));
        assert!(err.to_string().contains("divides"));
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let mut raw = input();
        raw.growth_rate_pct = 9.5;
        assert!(Scenario::try_from(raw).unwrap_err().is_invalid_scenario());

        let mut raw = input();
        raw.growth_rate_pct = f64::NAN;
        assert!(Scenario::try_from(raw).is_err());

        let mut raw = input();
        raw.years_funded = 4;
        assert!(Scenario::try_from(raw).is_err());

        let mut raw = input();
        raw.retirement_years = 41;
        assert!(Scenario::try_from(raw).is_err());

        let mut raw = input();
        raw.reposition_amount = -1.0;
        assert!(Scenario::try_from(raw).is_err());

        let mut raw = input();
        raw.annual_income = f64::INFINITY;
        assert!(Scenario::try_from(raw).is_err());
    }

    #[test]
    fn test_range_edges_accepted() {
        assert!(Scenario::new(0.0, 0.0, ProductType::WholeLife, 3.0, 5, 10).is_ok());
        assert!(Scenario::new(0.0, 0.0, ProductType::WholeLife, 9.0, 30, 40).is_ok());
    }

    #[test]
    fn test_retirement_shorter_than_funding_is_valid() {
        let scenario = Scenario::new(100_000.0, 10_000.0, ProductType::IndexedUL, 6.0, 20, 10);
        assert!(scenario.is_ok());
    }

    #[test]
    fn test_clamped_follows_slider_bounds() {
        let raw = ScenarioInput {
            annual_income: -5.0,
            reposition_amount: -100.0,
            product: ProductType::VariableUL,
            growth_rate_pct: 9.5,
            years_funded: 2,
            retirement_years: 0,
        };

        let clamped = raw.clamped();
        assert_eq!(clamped.annual_income, 0.0);
        assert_eq!(clamped.reposition_amount, 0.0);
        assert_eq!(clamped.growth_rate_pct, 9.0);
        assert_eq!(clamped.years_funded, 5);
        assert_eq!(clamped.retirement_years, 10);
        assert!(Scenario::try_from(clamped).is_ok());
    }

    #[test]
    fn test_contribution_for_year() {
        let scenario = Scenario::new(0.0, 10_000.0, ProductType::IndexedUL, 5.0, 5, 10).unwrap();
        assert_eq!(scenario.contribution_for_year(0), 0.0);
        assert_eq!(scenario.contribution_for_year(1), 10_000.0);
        assert_eq!(scenario.contribution_for_year(5), 10_000.0);
        assert_eq!(scenario.contribution_for_year(6), 0.0);
    }

    #[test]
    fn test_product_default_is_indexed_ul() {
        assert_eq!(ProductType::default(), ProductType::IndexedUL);
        assert_eq!(ScenarioInput::default().product, ProductType::IndexedUL);
    }

    #[test]
    fn test_product_parsing() {
        assert_eq!("Indexed UL".parse::<ProductType>().unwrap(), ProductType::IndexedUL);
        assert_eq!("vul".parse::<ProductType>().unwrap(), ProductType::VariableUL);
        assert_eq!("WholeLife".parse::<ProductType>().unwrap(), ProductType::WholeLife);
        assert_eq!("guaranteed-ul".parse::<ProductType>().unwrap(), ProductType::GuaranteedUL);
        assert!(matches!(
            "Term".parse::<ProductType>(),
            Err(BlueprintError::UnknownProduct(_))
        ));

        for product in ProductType::ALL {
            assert_eq!(product.as_str().parse::<ProductType>().unwrap(), product);
            assert_eq!(product.code().parse::<ProductType>().unwrap(), product);
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"annual_income":250000,"reposition_amount":50000,"product":"IUL",
                     "growth_rate_pct":6.0,"years_funded":15,"retirement_years":25}"#;
        let scenario: Scenario = serde_json::from_str(ok).unwrap();
        assert_eq!(scenario.product(), ProductType::IndexedUL);

        let bad = r#"{"annual_income":250000,"reposition_amount":50000,"product":"Whole Life",
                      "growth_rate_pct":6.0,"years_funded":15,"retirement_years":0}"#;
        assert!(serde_json::from_str::<Scenario>(bad).is_err());
    }

    #[test]
    fn test_with_growth_rate_revalidates() {
        let scenario = Scenario::default();
        assert_eq!(scenario.with_growth_rate(8.0).unwrap().growth_rate_pct(), 8.0);
        assert!(scenario.with_growth_rate(2.0).is_err());
    }
}
