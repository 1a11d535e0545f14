//! cpam-analytics - Descriptive statistics reports for CPAM datasets
//!
//! This library computes descriptive statistics (totals, means, medians,
//! standard deviations, growth rates, shares, Pearson correlations) over two
//! fixed tabular datasets — French health-spending by category and medical
//! acts by specialty — and renders structured terminal reports with
//! rule-based recommendations and an executive synthesis.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models and the fixed datasets
//! - `stats`: Descriptive statistics and Pearson correlation
//! - `reports`: Report generation (spending, acts, full report)
//! - `display`: Terminal formatting helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use cpam_analytics::reports::FullReport;
//!
//! let report = FullReport::generate()?;
//! print!("{}", report.format_terminal());
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod stats;

pub use error::AnalyticsError;
