//! Medical-act records by specialty
//!
//! One record per specialty: yearly act volume, average cost per act in
//! euros, and the CPAM reimbursement rate. Total cost and reimbursed amount
//! are derived on demand.

use serde::{Deserialize, Serialize};

/// A single specialty with its act volume and cost profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActRecord {
    /// Specialty name (e.g. "Généraliste")
    pub specialty: String,
    /// Number of acts per year
    pub act_count: u64,
    /// Average cost per act in euros
    pub average_cost: f64,
    /// CPAM reimbursement rate in percent (0-100)
    pub reimbursement_rate: f64,
}

impl ActRecord {
    /// Create a new act record
    pub fn new(
        specialty: impl Into<String>,
        act_count: u64,
        average_cost: f64,
        reimbursement_rate: f64,
    ) -> Self {
        Self {
            specialty: specialty.into(),
            act_count,
            average_cost,
            reimbursement_rate,
        }
    }

    /// Total cost of all acts for this specialty, in M€
    pub fn total_cost_millions(&self) -> f64 {
        self.act_count as f64 * self.average_cost / 1_000_000.0
    }

    /// CPAM-borne reimbursement for this specialty, in M€
    pub fn reimbursed_millions(&self) -> f64 {
        self.total_cost_millions() * self.reimbursement_rate / 100.0
    }

    /// Share of a total act volume, in percent
    pub fn volume_share(&self, total_acts: u64) -> f64 {
        self.act_count as f64 / total_acts as f64 * 100.0
    }
}

/// The fixed medical-acts dataset (five specialties)
pub fn acts_dataset() -> Vec<ActRecord> {
    vec![
        ActRecord::new("Généraliste", 8_500_000, 25.0, 70.0),
        ActRecord::new("Cardiologie", 1_200_000, 45.0, 65.0),
        ActRecord::new("Dermatologie", 900_000, 35.0, 60.0),
        ActRecord::new("Pédiatrie", 1_500_000, 30.0, 100.0),
        ActRecord::new("Ophtalmologie", 1_100_000, 40.0, 60.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cost_millions() {
        let record = ActRecord::new("Test", 1_000_000, 25.0, 70.0);
        assert!((record.total_cost_millions() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_reimbursed_never_exceeds_cost() {
        for record in acts_dataset() {
            assert!(record.reimbursed_millions() <= record.total_cost_millions());
        }
    }

    #[test]
    fn test_full_reimbursement_rate() {
        let pediatrics = &acts_dataset()[3];
        assert_eq!(pediatrics.specialty, "Pédiatrie");
        assert_eq!(pediatrics.reimbursed_millions(), pediatrics.total_cost_millions());
    }

    #[test]
    fn test_volume_shares_sum_to_one_hundred() {
        let records = acts_dataset();
        let total: u64 = records.iter().map(|r| r.act_count).sum();
        let share_sum: f64 = records.iter().map(|r| r.volume_share(total)).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }
}
