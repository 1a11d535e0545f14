//! Health-spending records by category
//!
//! One record per spending category, covering three budget years plus the
//! share of the population concerned and the observed annual growth rate.
//! The dataset itself is fixed; derived columns are pure functions of the
//! base fields.

use serde::{Deserialize, Serialize};

/// A single spending category with three years of expenditure (in millions
/// of euros), the share of the population concerned, and the annual growth
/// rate observed for the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingRecord {
    /// Category name (e.g. "Consultations")
    pub category: String,
    /// 2023 expenditure in M€
    pub spend_2023: f64,
    /// 2022 expenditure in M€
    pub spend_2022: f64,
    /// 2021 expenditure in M€
    pub spend_2021: f64,
    /// Percentage of the population concerned by this category
    pub population_share: f64,
    /// Annual growth rate in percent
    pub annual_growth: f64,
}

impl SpendingRecord {
    /// Create a new spending record
    pub fn new(
        category: impl Into<String>,
        spend_2023: f64,
        spend_2022: f64,
        spend_2021: f64,
        population_share: f64,
        annual_growth: f64,
    ) -> Self {
        Self {
            category: category.into(),
            spend_2023,
            spend_2022,
            spend_2021,
            population_share,
            annual_growth,
        }
    }

    /// Year-over-year growth from 2022 to 2023, in percent
    pub fn growth_2022_2023(&self) -> f64 {
        (self.spend_2023 - self.spend_2022) / self.spend_2022 * 100.0
    }

    /// Growth over the 2021 to 2023 span, in percent
    pub fn growth_2021_2023(&self) -> f64 {
        (self.spend_2023 - self.spend_2021) / self.spend_2021 * 100.0
    }

    /// Share of a 2023 total, in percent
    ///
    /// The caller supplies the dataset-wide 2023 total, which is nonzero by
    /// construction for the fixed dataset.
    pub fn share_of_2023_total(&self, total_2023: f64) -> f64 {
        self.spend_2023 / total_2023 * 100.0
    }
}

/// The fixed health-spending dataset (five categories, amounts in M€)
pub fn spending_dataset() -> Vec<SpendingRecord> {
    vec![
        SpendingRecord::new("Consultations", 12_000.0, 11_500.0, 11_000.0, 85.0, 4.3),
        SpendingRecord::new("Médicaments", 9_500.0, 9_200.0, 8_800.0, 70.0, 3.8),
        SpendingRecord::new("Hospitalisations", 15_000.0, 14_500.0, 14_000.0, 25.0, 3.6),
        SpendingRecord::new("Soins dentaires", 3_000.0, 2_800.0, 2_600.0, 60.0, 7.1),
        SpendingRecord::new("Optique", 2_000.0, 1_900.0, 1_800.0, 40.0, 5.3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_totals() {
        let records = spending_dataset();
        assert_eq!(records.len(), 5);

        let total_2023: f64 = records.iter().map(|r| r.spend_2023).sum();
        assert_eq!(total_2023, 41_500.0);
    }

    #[test]
    fn test_growth_zero_when_years_equal() {
        let record = SpendingRecord::new("Test", 100.0, 100.0, 90.0, 50.0, 1.0);
        assert_eq!(record.growth_2022_2023(), 0.0);
    }

    #[test]
    fn test_growth_2022_2023() {
        let record = SpendingRecord::new("Test", 110.0, 100.0, 90.0, 50.0, 1.0);
        assert!((record.growth_2022_2023() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_shares_sum_to_one_hundred() {
        let records = spending_dataset();
        let total: f64 = records.iter().map(|r| r.spend_2023).sum();
        let share_sum: f64 = records.iter().map(|r| r.share_of_2023_total(total)).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_derived_columns_are_pure() {
        let record = SpendingRecord::new("Test", 110.0, 100.0, 90.0, 50.0, 1.0);
        assert_eq!(record.growth_2021_2023(), record.growth_2021_2023());
        assert_eq!(record.share_of_2023_total(41_500.0), record.share_of_2023_total(41_500.0));
    }
}
