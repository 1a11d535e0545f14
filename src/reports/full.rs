//! Full Report
//!
//! Runs the spending and acts analyses in sequence and adds an executive
//! synthesis. The bundle serializes to JSON with a versioned envelope.

use crate::display::{double_separator, format_millions, format_signed_percentage};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::reports::{ActsReport, SpendingReport};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full Report
#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    /// Spending analysis
    pub spending: SpendingReport,
    /// Acts analysis
    pub acts: ActsReport,
    /// Total 2023 health budget in M€
    pub total_budget: f64,
    /// Mean year-over-year growth 2022 to 2023, in percent
    pub mean_growth: f64,
    /// Generation timestamp
    pub generated_at: DateTime<Local>,
}

/// JSON export envelope, versioned for compatibility checking
#[derive(Debug, Serialize)]
struct ExportEnvelope<'a> {
    /// Schema version
    schema_version: &'static str,
    /// Application version that created the export
    app_version: &'static str,
    /// The report itself
    #[serde(flatten)]
    report: &'a FullReport,
}

impl FullReport {
    /// Generate the full report over both fixed datasets
    pub fn generate() -> AnalyticsResult<Self> {
        let spending = SpendingReport::generate()?;
        let acts = ActsReport::generate()?;
        let total_budget = spending.total_2023;
        let mean_growth = spending.mean_growth;

        Ok(Self {
            spending,
            acts,
            total_budget,
            mean_growth,
            generated_at: Local::now(),
        })
    }

    /// Format the full report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("ANALYSIS REPORT - CPAM STRASBOURG\n");
        output.push_str("Descriptive statistics\n");
        output.push_str(&format!(
            "Date: {}\n\n",
            self.generated_at.format("%d/%m/%Y")
        ));

        output.push_str(&self.spending.format_terminal());
        output.push('\n');
        output.push_str(&self.acts.format_terminal());

        output.push('\n');
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str("EXECUTIVE SYNTHESIS\n");
        output.push_str(&double_separator(60));
        output.push('\n');

        output.push_str(&format!(
            "* 2023 health spending budget: {}\n",
            format_millions(self.total_budget)
        ));
        output.push_str(&format!(
            "* Medical acts cost: {:.1} M€\n",
            self.acts.total_cost
        ));
        output.push_str(&format!(
            "* Mean growth: {}\n",
            format_signed_percentage(self.mean_growth)
        ));
        output.push_str(&format!(
            "* Main spending category: {}\n",
            self.spending.top_spend_category
        ));
        output.push_str(&format!(
            "* Dominant specialty: {}\n",
            self.acts.top_volume_specialty
        ));

        output
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let envelope = ExportEnvelope {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            report: self,
        };
        serde_json::to_writer_pretty(&mut *writer, &envelope)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Export both tables to CSV format, spending first
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        self.spending.export_csv(writer)?;
        writeln!(writer).map_err(|e| AnalyticsError::Export(e.to_string()))?;
        self.acts.export_csv(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_mirrors_component_reports() {
        let report = FullReport::generate().unwrap();
        assert_eq!(report.total_budget, report.spending.total_2023);
        assert_eq!(report.mean_growth, report.spending.mean_growth);
        assert_eq!(report.total_budget, 41_500.0);
    }

    #[test]
    fn test_synthesis_names_dominant_entries() {
        let report = FullReport::generate().unwrap();
        let text = report.format_terminal();
        assert!(text.contains("EXECUTIVE SYNTHESIS"));
        assert!(text.contains("Main spending category: Hospitalisations"));
        assert!(text.contains("Dominant specialty: Généraliste"));
    }

    #[test]
    fn test_format_terminal_is_idempotent() {
        let report = FullReport::generate().unwrap();
        assert_eq!(report.format_terminal(), report.format_terminal());
    }

    #[test]
    fn test_export_json_envelope() {
        let report = FullReport::generate().unwrap();
        let mut buffer = Vec::new();
        report.export_json(&mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["total_budget"], 41_500.0);
        assert_eq!(value["spending"]["rows"].as_array().unwrap().len(), 5);
        assert_eq!(value["acts"]["total_acts"], 13_200_000);
    }

    #[test]
    fn test_export_csv_contains_both_tables() {
        let report = FullReport::generate().unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("Category,"));
        assert!(csv.contains("Specialty,"));
    }
}
