//! Descriptive statistics over numeric series
//!
//! All routines operate on `&[f64]` slices and reject empty input. The
//! standard deviation is the population flavor (divide by n).

use crate::error::{AnalyticsError, AnalyticsResult};
use std::cmp::Ordering;

/// Summary statistics for a single numeric series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Sum of all values
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (midpoint average for even-length series)
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Index of the smallest value
    pub min_index: usize,
    /// Largest value
    pub max: f64,
    /// Index of the largest value
    pub max_index: usize,
}

impl SeriesSummary {
    /// Compute the full summary for a series
    ///
    /// `label` names the series in error messages.
    pub fn compute(values: &[f64], label: &str) -> AnalyticsResult<Self> {
        if values.is_empty() {
            return Err(AnalyticsError::empty_series(label));
        }

        let (min_index, min) = extreme_by(values, Ordering::Less);
        let (max_index, max) = extreme_by(values, Ordering::Greater);

        Ok(Self {
            sum: values.iter().sum(),
            mean: mean(values)?,
            median: median(values)?,
            std_dev: population_std_dev(values)?,
            min,
            min_index,
            max,
            max_index,
        })
    }
}

/// Arithmetic mean of a series
pub fn mean(values: &[f64]) -> AnalyticsResult<f64> {
    if values.is_empty() {
        return Err(AnalyticsError::empty_series("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a series (average of the two middle values for even n)
pub fn median(values: &[f64]) -> AnalyticsResult<f64> {
    if values.is_empty() {
        return Err(AnalyticsError::empty_series("median"));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Population standard deviation of a series (divide by n)
pub fn population_std_dev(values: &[f64]) -> AnalyticsResult<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Find the first value ordered `direction` relative to all others
fn extreme_by(values: &[f64], direction: Ordering) -> (usize, f64) {
    let mut best_index = 0;
    let mut best = values[0];
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v.partial_cmp(&best) == Some(direction) {
            best_index = i;
            best = v;
        }
    }
    (best_index, best)
}
