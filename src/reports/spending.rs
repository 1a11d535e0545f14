//! Spending Report
//!
//! Descriptive analysis of health spending by category: yearly summary
//! statistics, growth rates, budget shares, correlations, and rule-based
//! recommendations.

use crate::display::{
    double_separator, format_millions, format_percentage, format_signed_percentage, separator,
};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{spending_dataset, SpendingRecord};
use crate::stats::{pearson, Correlation, SeriesSummary};
use serde::Serialize;
use std::io::Write;

/// Mean-growth threshold (percent) above which the report flags health-cost
/// inflation. Business heuristic, kept as given.
const INFLATION_VIGILANCE_THRESHOLD: f64 = 5.0;

/// A spending category with its derived columns
#[derive(Debug, Clone, Serialize)]
pub struct SpendingRow {
    /// Base record
    #[serde(flatten)]
    pub record: SpendingRecord,
    /// Year-over-year growth 2022 to 2023, in percent
    pub growth_2022_2023: f64,
    /// Growth over the 2021 to 2023 span, in percent
    pub growth_2021_2023: f64,
    /// Share of the 2023 total, in percent
    pub share_2023: f64,
}

/// Summary statistics for one budget year across all categories
#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    /// Budget year
    pub year: u16,
    /// Total spend in M€
    pub total: f64,
    /// Mean spend per category in M€
    pub mean: f64,
    /// Median spend in M€
    pub median: f64,
    /// Population standard deviation in M€
    pub std_dev: f64,
    /// Smallest spend in M€
    pub min: f64,
    /// Category owning the smallest spend
    pub min_category: String,
    /// Largest spend in M€
    pub max: f64,
    /// Category owning the largest spend
    pub max_category: String,
}

/// Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    /// Rows with derived columns, in dataset order
    pub rows: Vec<SpendingRow>,
    /// Per-year summaries, most recent year first
    pub years: Vec<YearSummary>,
    /// Total 2023 spend in M€
    pub total_2023: f64,
    /// Mean year-over-year growth 2022 to 2023, in percent
    pub mean_growth: f64,
    /// Correlation between 2023 spend and population share
    pub spend_population_correlation: Correlation,
    /// Correlation between 2023 spend and annual growth
    pub spend_growth_correlation: Correlation,
    /// Category with the largest 2023 spend
    pub top_spend_category: String,
    /// Category with the largest annual growth
    pub top_growth_category: String,
    /// Rule-based recommendations, in emission order
    pub recommendations: Vec<String>,
}

impl SpendingReport {
    /// Generate the report over the fixed spending dataset
    pub fn generate() -> AnalyticsResult<Self> {
        Self::from_records(spending_dataset())
    }

    /// Generate the report over an arbitrary set of records
    pub fn from_records(records: Vec<SpendingRecord>) -> AnalyticsResult<Self> {
        if records.is_empty() {
            return Err(AnalyticsError::Report("no spending records".into()));
        }

        let spend_2023: Vec<f64> = records.iter().map(|r| r.spend_2023).collect();
        let spend_2022: Vec<f64> = records.iter().map(|r| r.spend_2022).collect();
        let spend_2021: Vec<f64> = records.iter().map(|r| r.spend_2021).collect();
        let population_share: Vec<f64> = records.iter().map(|r| r.population_share).collect();
        let annual_growth: Vec<f64> = records.iter().map(|r| r.annual_growth).collect();

        let years = vec![
            year_summary(2023, &spend_2023, &records)?,
            year_summary(2022, &spend_2022, &records)?,
            year_summary(2021, &spend_2021, &records)?,
        ];

        let total_2023: f64 = spend_2023.iter().sum();

        let rows: Vec<SpendingRow> = records
            .iter()
            .map(|r| SpendingRow {
                record: r.clone(),
                growth_2022_2023: r.growth_2022_2023(),
                growth_2021_2023: r.growth_2021_2023(),
                share_2023: r.share_of_2023_total(total_2023),
            })
            .collect();

        let growths: Vec<f64> = rows.iter().map(|r| r.growth_2022_2023).collect();
        let mean_growth = crate::stats::mean(&growths)?;

        let spend_population_correlation = pearson(&spend_2023, &population_share)?;
        let spend_growth_correlation = pearson(&spend_2023, &annual_growth)?;

        let top_spend_category = years[0].max_category.clone();
        let growth_summary = SeriesSummary::compute(&annual_growth, "annual_growth")?;
        let top_growth_category = records[growth_summary.max_index].category.clone();

        let mut recommendations = vec![
            format!(
                "Monitor {} (growth {})",
                top_growth_category.to_lowercase(),
                format_percentage(growth_summary.max)
            ),
            format!(
                "Optimize the management of {} (largest spending category)",
                top_spend_category.to_lowercase()
            ),
        ];
        if mean_growth > INFLATION_VIGILANCE_THRESHOLD {
            recommendations.push("Stay vigilant on health-cost inflation".to_string());
        }

        Ok(Self {
            rows,
            years,
            total_2023,
            mean_growth,
            spend_population_correlation,
            spend_growth_correlation,
            top_spend_category,
            top_growth_category,
            recommendations,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str("DESCRIPTIVE ANALYSIS - HEALTH SPENDING IN FRANCE\n");
        output.push_str(&double_separator(60));
        output.push('\n');

        // 1. Yearly summary statistics
        output.push_str("\n1. GENERAL DESCRIPTIVE STATISTICS\n");
        output.push_str(&separator(50));
        output.push('\n');

        for year in &self.years {
            output.push_str(&format!("\nSpending {}:\n", year.year));
            output.push_str(&format!("  Total: {}\n", format_millions(year.total)));
            output.push_str(&format!("  Mean: {:.0} M€\n", year.mean));
            output.push_str(&format!("  Median: {:.0} M€\n", year.median));
            output.push_str(&format!("  Std dev: {:.0} M€\n", year.std_dev));
            output.push_str(&format!(
                "  Min: {} ({})\n",
                format_millions(year.min),
                year.min_category
            ));
            output.push_str(&format!(
                "  Max: {} ({})\n",
                format_millions(year.max),
                year.max_category
            ));
        }

        // 2. Evolution over time
        output.push_str("\n\n2. EVOLUTION OVER TIME\n");
        output.push_str(&separator(50));
        output.push('\n');

        output.push_str("\nEvolution 2022-2023 by category:\n");
        for row in &self.rows {
            output.push_str(&format!(
                "  {}: {}\n",
                row.record.category,
                format_signed_percentage(row.growth_2022_2023)
            ));
        }
        output.push_str(&format!(
            "\nMean growth 2022-2023: {}\n",
            format_percentage(self.mean_growth)
        ));

        // 3. Budget breakdown
        output.push_str("\n\n3. SPENDING BREAKDOWN\n");
        output.push_str(&separator(50));
        output.push('\n');

        output.push_str("\n2023 spending by category:\n");
        for row in &self.rows {
            output.push_str(&format!(
                "  {}: {} ({})\n",
                row.record.category,
                format_percentage(row.share_2023),
                format_millions(row.record.spend_2023)
            ));
        }

        // 4. Correlations
        output.push_str("\n\n4. CORRELATION ANALYSIS\n");
        output.push_str(&separator(50));
        output.push('\n');

        output.push_str(&format!(
            "Spending/population correlation: {:.3}\n",
            self.spend_population_correlation.r
        ));
        output.push_str(&format!(
            "P-value: {:.3}\n",
            self.spend_population_correlation.p_value
        ));
        output.push_str(&format!(
            "Spending/growth correlation: {:.3}\n",
            self.spend_growth_correlation.r
        ));
        output.push_str(&format!(
            "P-value: {:.3}\n",
            self.spend_growth_correlation.p_value
        ));

        // 5. Business insights
        output.push_str("\n\n5. BUSINESS INSIGHTS FOR THE CPAM\n");
        output.push_str(&separator(50));
        output.push('\n');

        let top_spend = &self.years[0];
        output.push_str(&format!(
            "* Main spending category: {} ({})\n",
            top_spend.max_category,
            format_millions(top_spend.max)
        ));
        output.push_str(&format!(
            "* Fastest growth: {} ({})\n",
            self.top_growth_category,
            format_percentage(
                self.rows
                    .iter()
                    .find(|r| r.record.category == self.top_growth_category)
                    .map(|r| r.record.annual_growth)
                    .unwrap_or_default()
            )
        ));
        output.push_str(&format!(
            "* Total 2023 budget: {}\n",
            format_millions(self.total_2023)
        ));
        output.push_str(&format!(
            "* Overall evolution: {}\n",
            format_signed_percentage(self.mean_growth)
        ));

        output.push_str("\nCPAM RECOMMENDATIONS:\n");
        for recommendation in &self.recommendations {
            output.push_str(&format!("* {}\n", recommendation));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        writeln!(
            writer,
            "Category,Spend2023,Spend2022,Spend2021,PopulationShare,AnnualGrowth,Growth2022To2023,Growth2021To2023,Share2023"
        )
        .map_err(|e| AnalyticsError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.1},{:.1},{:.1},{:.1},{:.1},{:.2},{:.2},{:.2}",
                row.record.category,
                row.record.spend_2023,
                row.record.spend_2022,
                row.record.spend_2021,
                row.record.population_share,
                row.record.annual_growth,
                row.growth_2022_2023,
                row.growth_2021_2023,
                row.share_2023
            )
            .map_err(|e| AnalyticsError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.1},,,,,{:.2},,100.00",
            self.total_2023, self.mean_growth
        )
        .map_err(|e| AnalyticsError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Build the summary for one budget year
fn year_summary(
    year: u16,
    values: &[f64],
    records: &[SpendingRecord],
) -> AnalyticsResult<YearSummary> {
    let summary = SeriesSummary::compute(values, &format!("spend_{year}"))?;
    Ok(YearSummary {
        year,
        total: summary.sum,
        mean: summary.mean,
        median: summary.median,
        std_dev: summary.std_dev,
        min: summary.min,
        min_category: records[summary.min_index].category.clone(),
        max: summary.max,
        max_category: records[summary.max_index].category.clone(),
    })
}
