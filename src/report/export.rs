//! Machine-readable exports: series CSV and full projection JSON

use super::{ReportInput, ReportRenderer};
use crate::error::BlueprintResult;
use crate::projection::round_to_cents;
use serde::Serialize;
use std::io::Write;

/// CSV row layout for the yearly series
#[derive(Debug, Serialize)]
struct SeriesRecord {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Capital")]
    capital: f64,
    #[serde(rename = "CumulativeContributions")]
    cumulative_contributions: f64,
    #[serde(rename = "RoiPercent")]
    roi_percent: f64,
}

/// Yearly series as CSV, one row per year, amounts rounded to cents
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesCsv;

impl ReportRenderer for SeriesCsv {
    fn file_name(&self) -> &'static str {
        "blueprint_series.csv"
    }

    fn render(&self, input: &ReportInput<'_>, out: &mut dyn Write) -> BlueprintResult<()> {
        let mut writer = csv::Writer::from_writer(out);
        for row in &input.projection.series {
            writer.serialize(SeriesRecord {
                year: row.year,
                capital: round_to_cents(row.capital),
                cumulative_contributions: round_to_cents(row.cumulative_contributions),
                roi_percent: row.roi_percent,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// The whole projection (scenario, summary, series) as pretty JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

impl ReportRenderer for JsonReport {
    fn file_name(&self) -> &'static str {
        "blueprint_projection.json"
    }

    fn render(&self, input: &ReportInput<'_>, out: &mut dyn Write) -> BlueprintResult<()> {
        serde_json::to_writer_pretty(&mut *out, input.projection)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{Projection, ProjectionEngine};
    use crate::scenario::{ProductType, Scenario};
    use chrono::NaiveDate;

    fn projection() -> Projection {
        let scenario = Scenario::new(120_000.0, 10_000.0, ProductType::IndexedUL, 5.0, 5, 10).unwrap();
        ProjectionEngine::default().project(&scenario)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_series_csv_layout() {
        let projection = projection();
        let csv = SeriesCsv.render_to_string(&ReportInput::new(&projection, date())).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Year,Capital,CumulativeContributions,RoiPercent");
        assert_eq!(lines[1], "1,10500.0,10000.0,5.0");
        assert_eq!(lines[2], "2,21525.0,20000.0,7.63");
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn test_json_contains_scenario_summary_and_series() {
        let projection = projection();
        let json = JsonReport.render_to_string(&ReportInput::new(&projection, date())).unwrap();
        let parsed: Projection = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.scenario, projection.scenario);
        assert_eq!(parsed.granularity, projection.granularity);
        assert_eq!(parsed.summary.total_contributions, 50_000.0);
        assert_eq!(parsed.series.len(), 15);
        assert_eq!(parsed.series.year(2).unwrap().roi_percent, 7.63);
    }
}
