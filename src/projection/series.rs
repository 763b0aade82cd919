//! Yearly series output structures

use serde::{Deserialize, Serialize};

/// A single year of the accumulation series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// Year index, starting at 1
    pub year: u32,

    /// Compounded capital at the end of the year
    pub capital: f64,

    /// Contributions made up to and including this year
    pub cumulative_contributions: f64,

    /// Gain of capital over contributions in percent, rounded to 2 decimals
    pub roi_percent: f64,
}

/// Complete year-by-year projection, fully materialized for random access
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlySeries {
    rows: Vec<YearRow>,
}

impl YearlySeries {
    pub fn with_capacity(years: usize) -> Self {
        Self {
            rows: Vec::with_capacity(years),
        }
    }

    /// Append the next year. Rows are expected in increasing year order.
    pub fn add_row(&mut self, row: YearRow) {
        debug_assert!(self.rows.last().map_or(true, |last| last.year < row.year));
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a 1-indexed year
    pub fn year(&self, year: u32) -> Option<&YearRow> {
        let idx = (year as usize).checked_sub(1)?;
        self.rows.get(idx)
    }

    pub fn final_row(&self) -> Option<&YearRow> {
        self.rows.last()
    }

    /// Capital at the end of the horizon
    pub fn final_capital(&self) -> f64 {
        self.final_row().map(|r| r.capital).unwrap_or(0.0)
    }

    /// Year with the largest capital balance
    pub fn peak(&self) -> Option<&YearRow> {
        self.rows
            .iter()
            .max_by(|a, b| a.capital.total_cmp(&b.capital))
    }

    /// `(year, capital, cumulative_contributions)` points for a chart renderer
    pub fn chart_points(&self) -> Vec<(u32, f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.year, r.capital, r.cumulative_contributions))
            .collect()
    }

    pub fn into_rows(self) -> Vec<YearRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a YearlySeries {
    type Item = &'a YearRow;
    type IntoIter = std::slice::Iter<'a, YearRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: u32, capital: f64, cumulative: f64) -> YearRow {
        YearRow {
            year,
            capital,
            cumulative_contributions: cumulative,
            roi_percent: 0.0,
        }
    }

    #[test]
    fn test_year_lookup_is_one_indexed() {
        let mut series = YearlySeries::with_capacity(2);
        series.add_row(row(1, 10_500.0, 10_000.0));
        series.add_row(row(2, 21_525.0, 20_000.0));

        assert!(series.year(0).is_none());
        assert_eq!(series.year(1).unwrap().capital, 10_500.0);
        assert_eq!(series.year(2).unwrap().cumulative_contributions, 20_000.0);
        assert!(series.year(3).is_none());
        assert_eq!(series.final_capital(), 21_525.0);
    }

    #[test]
    fn test_chart_points_and_peak() {
        let mut series = YearlySeries::default();
        series.add_row(row(1, 100.0, 100.0));
        series.add_row(row(2, 300.0, 200.0));
        series.add_row(row(3, 250.0, 200.0));

        assert_eq!(series.peak().unwrap().year, 2);
        assert_eq!(series.chart_points()[2], (3, 250.0, 200.0));
    }

    #[test]
    fn test_empty_series() {
        let series = YearlySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.final_capital(), 0.0);
        assert!(series.peak().is_none());
    }
}
