//! Statistics routines for cpam-analytics
//!
//! Descriptive statistics over numeric series plus Pearson correlation
//! with a two-sided significance value.

pub mod correlation;
pub mod descriptive;

pub use correlation::{pearson, Correlation};
pub use descriptive::{mean, median, population_std_dev, SeriesSummary};
