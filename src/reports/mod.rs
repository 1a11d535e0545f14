//! Reports module for cpam-analytics
//!
//! Provides the spending analysis, the medical-acts analysis, and the full
//! report combining both with an executive synthesis.

pub mod acts;
pub mod full;
pub mod spending;

pub use acts::{ActsReport, ActsRow};
pub use full::FullReport;
pub use spending::{SpendingReport, SpendingRow, YearSummary};
