//! Scenario inputs and the validation boundary in front of the engine

mod data;
pub mod loader;

pub use data::{
    ProductType, Scenario, ScenarioInput, DEFAULT_ANNUAL_INCOME, DEFAULT_GROWTH_RATE_PCT,
    DEFAULT_REPOSITION_AMOUNT, DEFAULT_RETIREMENT_YEARS, DEFAULT_YEARS_FUNDED, GROWTH_RATE_RANGE,
    RETIREMENT_YEARS_RANGE, YEARS_FUNDED_RANGE,
};
pub use loader::{load_scenarios, load_scenarios_from_json_reader, load_scenarios_from_reader};
