//! Export collaborators for computed projections
//!
//! Renderers only see an already computed `Projection`, an optional chart
//! image produced elsewhere, and the preparation date. Nothing in here feeds
//! back into the engine.

mod chart;
mod document;
mod export;
mod format;

pub use chart::ChartImage;
pub use document::HtmlDocument;
pub use export::{JsonReport, SeriesCsv};
pub use format::{format_currency, format_percent, CurrencyPrecision};

use crate::error::BlueprintResult;
use crate::projection::Projection;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Inputs available to every renderer
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub projection: &'a Projection,
    pub chart: Option<&'a ChartImage>,
    pub prepared_on: NaiveDate,
}

impl<'a> ReportInput<'a> {
    pub fn new(projection: &'a Projection, prepared_on: NaiveDate) -> Self {
        Self {
            projection,
            chart: None,
            prepared_on,
        }
    }

    pub fn with_chart(mut self, chart: &'a ChartImage) -> Self {
        self.chart = Some(chart);
        self
    }
}

/// Something that can write a projection out in one format
pub trait ReportRenderer {
    /// Default file name for this format
    fn file_name(&self) -> &'static str;

    /// Write the rendered report
    fn render(&self, input: &ReportInput<'_>, out: &mut dyn Write) -> BlueprintResult<()>;

    /// Render to an in-memory string
    fn render_to_string(&self, input: &ReportInput<'_>) -> BlueprintResult<String> {
        let mut buf = Vec::new();
        self.render(input, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Render into `dir` under the renderer's file name, returning the path written
///
/// The report is rendered in memory first; a failed render leaves no file behind.
pub fn write_report(renderer: &dyn ReportRenderer, input: &ReportInput<'_>, dir: &Path) -> BlueprintResult<PathBuf> {
    let path = dir.join(renderer.file_name());
    let mut buf = Vec::new();
    if let Err(err) = renderer.render(input, &mut buf) {
        log::warn!("Failed to render {}: {}", path.display(), err);
        return Err(err);
    }
    std::fs::write(&path, &buf)?;

    log::info!("Wrote {}", path.display());
    Ok(path)
}
