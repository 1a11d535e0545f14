//! Acts Report
//!
//! Descriptive analysis of medical acts by specialty: volume shares plus
//! the economic view (total cost and CPAM-borne reimbursement).

use crate::display::{double_separator, format_count, format_percentage, separator};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{acts_dataset, ActRecord};
use serde::Serialize;
use std::io::Write;

/// A specialty with its derived columns
#[derive(Debug, Clone, Serialize)]
pub struct ActsRow {
    /// Base record
    #[serde(flatten)]
    pub record: ActRecord,
    /// Share of total act volume, in percent
    pub volume_share: f64,
    /// Total cost of all acts, in M€
    pub total_cost: f64,
    /// CPAM-borne reimbursement, in M€
    pub reimbursed: f64,
}

/// Acts Report
#[derive(Debug, Clone, Serialize)]
pub struct ActsReport {
    /// Rows with derived columns, in dataset order
    pub rows: Vec<ActsRow>,
    /// Total number of acts across all specialties
    pub total_acts: u64,
    /// Total cost of all acts, in M€
    pub total_cost: f64,
    /// Total CPAM-borne reimbursement, in M€
    pub total_reimbursed: f64,
    /// Specialty with the largest act volume
    pub top_volume_specialty: String,
}

impl ActsReport {
    /// Generate the report over the fixed acts dataset
    pub fn generate() -> AnalyticsResult<Self> {
        Self::from_records(acts_dataset())
    }

    /// Generate the report over an arbitrary set of records
    pub fn from_records(records: Vec<ActRecord>) -> AnalyticsResult<Self> {
        if records.is_empty() {
            return Err(AnalyticsError::Report("no act records".into()));
        }

        let total_acts: u64 = records.iter().map(|r| r.act_count).sum();
        if total_acts == 0 {
            return Err(AnalyticsError::Report("total act volume is zero".into()));
        }

        let rows: Vec<ActsRow> = records
            .iter()
            .map(|r| ActsRow {
                record: r.clone(),
                volume_share: r.volume_share(total_acts),
                total_cost: r.total_cost_millions(),
                reimbursed: r.reimbursed_millions(),
            })
            .collect();

        let total_cost: f64 = rows.iter().map(|r| r.total_cost).sum();
        let total_reimbursed: f64 = rows.iter().map(|r| r.reimbursed).sum();

        let top_volume_specialty = rows
            .iter()
            .max_by_key(|r| r.record.act_count)
            .map(|r| r.record.specialty.clone())
            .unwrap_or_default();

        Ok(Self {
            rows,
            total_acts,
            total_cost,
            total_reimbursed,
            top_volume_specialty,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str("DESCRIPTIVE ANALYSIS - MEDICAL ACTS BY SPECIALTY\n");
        output.push_str(&double_separator(60));
        output.push('\n');

        output.push_str("\n1. ACT VOLUME BY SPECIALTY\n");
        output.push_str(&separator(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "  {}: {} acts ({})\n",
                row.record.specialty,
                format_count(row.record.act_count),
                format_percentage(row.volume_share)
            ));
        }
        output.push_str(&format!("\nTotal acts: {}\n", format_count(self.total_acts)));

        output.push_str("\n2. ECONOMIC ANALYSIS\n");
        output.push_str(&separator(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!("  {}:\n", row.record.specialty));
            output.push_str(&format!("    Total cost: {:.1} M€\n", row.total_cost));
            output.push_str(&format!("    CPAM reimbursement: {:.1} M€\n", row.reimbursed));
        }

        output.push_str(&format!(
            "\nTotal cost, all acts: {:.1} M€\n",
            self.total_cost
        ));
        output.push_str(&format!(
            "Total CPAM reimbursement: {:.1} M€\n",
            self.total_reimbursed
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        writeln!(
            writer,
            "Specialty,ActCount,AverageCost,ReimbursementRate,VolumeShare,TotalCostMillions,ReimbursedMillions"
        )
        .map_err(|e| AnalyticsError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2},{:.1},{:.2},{:.2},{:.2}",
                row.record.specialty,
                row.record.act_count,
                row.record.average_cost,
                row.record.reimbursement_rate,
                row.volume_share,
                row.total_cost,
                row.reimbursed
            )
            .map_err(|e| AnalyticsError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{},,,100.00,{:.2},{:.2}",
            self.total_acts, self.total_cost, self.total_reimbursed
        )
        .map_err(|e| AnalyticsError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_shares_sum_to_one_hundred() {
        let report = ActsReport::generate().unwrap();
        let share_sum: f64 = report.rows.iter().map(|r| r.volume_share).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_reimbursement_never_exceeds_cost() {
        let report = ActsReport::generate().unwrap();
        for row in &report.rows {
            assert!(row.reimbursed <= row.total_cost, "{}", row.record.specialty);
        }
        assert!(report.total_reimbursed <= report.total_cost);
    }

    #[test]
    fn test_totals() {
        let report = ActsReport::generate().unwrap();
        assert_eq!(report.total_acts, 13_200_000);
        // 212.5 + 54 + 31.5 + 45 + 44 M€
        assert!((report.total_cost - 387.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_volume_specialty() {
        let report = ActsReport::generate().unwrap();
        assert_eq!(report.top_volume_specialty, "Généraliste");
    }

    #[test]
    fn test_format_terminal_is_idempotent() {
        let report = ActsReport::generate().unwrap();
        assert_eq!(report.format_terminal(), report.format_terminal());
    }

    #[test]
    fn test_export_csv() {
        let report = ActsReport::generate().unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Specialty,"));
        assert!(csv.contains("Généraliste,8500000"));
        assert!(csv.contains("TOTAL,13200000"));
        assert_eq!(csv.lines().count(), 7);
    }

    #[test]
    fn test_zero_volume_is_error() {
        let records = vec![ActRecord::new("Test", 0, 25.0, 70.0)];
        assert!(ActsReport::from_records(records).is_err());
    }
}
