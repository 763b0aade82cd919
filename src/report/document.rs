//! One-page HTML summary document

use super::format::{format_currency, format_percent, CurrencyPrecision};
use super::{ReportInput, ReportRenderer};
use crate::error::BlueprintResult;
use crate::scenario::ProductType;
use std::io::Write;

const TITLE: &str = "Private Retirement Blueprint";
const SUBTITLE: &str = "Calculate Your Potential Tax-Free Cash Flow";

const HOW_IT_WORKS: [&str; 3] = [
    "Your annual contributions are assumed to grow at the selected rate.",
    "The capital compounds tax-deferred.",
    "At retirement, distributions are modeled as tax-free policy loans (under IRC §7702).",
];

const CALL_TO_ACTION: &str = "Want a personalized case design? Book a session.";

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;max-width:720px;margin:40px auto;color:#222}\
h1{margin-bottom:0}h2{margin-top:4px;font-weight:normal;color:#555}\
table.metrics td{padding:4px 16px 4px 0}table.metrics td.value{font-weight:bold;text-align:right}\
.selected{font-weight:bold}img{max-width:100%}.prepared{color:#777;font-size:0.9em}";

/// Fixed one-page layout: title, three headline amounts, assumptions,
/// the explanatory paragraph and, when provided, the chart image embedded
/// inline so the file is self-contained.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocument;

impl ReportRenderer for HtmlDocument {
    fn file_name(&self) -> &'static str {
        "blueprint_report.html"
    }

    fn render(&self, input: &ReportInput<'_>, out: &mut dyn Write) -> BlueprintResult<()> {
        let projection = input.projection;
        let scenario = &projection.scenario;
        let summary = &projection.summary;
        let cents = |v: f64| format_currency(v, CurrencyPrecision::Cents);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", TITLE)?;
        writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLE)?;

        writeln!(out, "<h1>{}</h1>", TITLE)?;
        writeln!(out, "<h2>{}</h2>", SUBTITLE)?;
        writeln!(out, "<p class=\"prepared\">Prepared {}</p>", input.prepared_on.format("%B %-d, %Y"))?;

        writeln!(out, "<table class=\"metrics\">")?;
        for (label, value) in [
            ("Total Contributions", summary.total_contributions),
            ("Projected Tax-Free Capital", summary.future_value),
            ("Estimated Annual Tax-Free Income", summary.estimated_annual_income),
        ] {
            writeln!(out, "<tr><td>{}</td><td class=\"value\">{}</td></tr>", label, cents(value))?;
        }
        writeln!(out, "</table>")?;

        writeln!(out, "<h3>Assumptions</h3>\n<ul>")?;
        writeln!(out, "<li>Annual income: {}</li>", cents(scenario.annual_income()))?;
        writeln!(out, "<li>Amount repositioned annually: {}</li>", cents(scenario.reposition_amount()))?;
        writeln!(out, "<li>Product type: {}</li>", escape_html(scenario.product().as_str()))?;
        writeln!(out, "<li>Expected annual growth rate: {}</li>", format_percent(scenario.growth_rate_pct()))?;
        writeln!(out, "<li>Years of contributions: {}</li>", scenario.years_funded())?;
        writeln!(out, "<li>Years of retirement income: {}</li>", scenario.retirement_years())?;
        writeln!(out, "</ul>")?;

        writeln!(out, "<h3>How these strategies work</h3>\n<ul>")?;
        for line in HOW_IT_WORKS {
            writeln!(out, "<li>{}</li>", escape_html(line))?;
        }
        writeln!(out, "</ul>")?;

        writeln!(out, "<p><strong>Product highlights:</strong></p>\n<ul>")?;
        for product in ProductType::ALL {
            let class = if product == scenario.product() { " class=\"selected\"" } else { "" };
            writeln!(
                out,
                "<li{}><em>{}</em>: {}</li>",
                class,
                product.code(),
                escape_html(product.highlight())
            )?;
        }
        writeln!(out, "</ul>")?;

        if let Some(chart) = input.chart {
            writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\">",
                chart.data_uri(),
                escape_html(&format!("Projected capital vs. contributions ({})", chart.file_name))
            )?;
        }

        writeln!(out, "<hr>\n<p><strong>{}</strong></p>", CALL_TO_ACTION)?;
        writeln!(out, "</body>\n</html>")?;
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use crate::report::ChartImage;
    use crate::scenario::Scenario;
    use chrono::NaiveDate;

    fn render(chart: Option<&ChartImage>) -> String {
        let projection = ProjectionEngine::default().project(&Scenario::default());
        let mut input = ReportInput::new(&projection, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        input.chart = chart;
        HtmlDocument.render_to_string(&input).unwrap()
    }

    #[test]
    fn test_document_contains_headline_values() {
        let html = render(None);

        assert!(html.contains(TITLE));
        assert!(html.contains("Prepared March 9, 2026"));
        assert!(html.contains("$750,000.00"));
        assert!(html.contains("$1,343,135.77"));
        assert!(html.contains("$53,725.43"));
        assert!(html.contains("IRC §7702"));
        assert!(html.contains(CALL_TO_ACTION));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_selected_product_highlighted() {
        let html = render(None);
        assert!(html.contains("<li class=\"selected\"><em>IUL</em>"));
        assert!(html.contains("<li><em>GUL</em>: Low cash value, high death benefit</li>"));
    }

    #[test]
    fn test_chart_embedded_inline() {
        let chart = ChartImage::new("growth.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);
        let html = render(Some(&chart));
        assert!(html.contains("<img src=\"data:image/png;base64,iVBORw==\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Guarantees + dividends"), "Guarantees + dividends");
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
