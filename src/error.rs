//! Error types for scenario validation and report export

use thiserror::Error;

/// Errors raised at the edges of the projection engine.
///
/// `InvalidScenario` is the only domain error: it is produced while turning a
/// raw `ScenarioInput` into a `Scenario`, never by the engine itself. The
/// remaining variants come from loading scenario files and writing exports.
#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("Invalid scenario: {field} {reason}")]
    InvalidScenario { field: &'static str, reason: String },

    #[error("Unknown product type: {0}")]
    UnknownProduct(String),

    #[error("Unsupported chart image '{0}': expected png, jpg, gif or svg")]
    InvalidChart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlueprintError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BlueprintError::InvalidScenario {
            field,
            reason: reason.into(),
        }
    }

    /// True for the domain error kind (rejected scenario input)
    pub fn is_invalid_scenario(&self) -> bool {
        matches!(self, BlueprintError::InvalidScenario { .. })
    }
}

pub type BlueprintResult<T> = Result<T, BlueprintError>;
