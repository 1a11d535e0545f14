//! Pearson correlation with two-sided significance
//!
//! The p-value comes from Student's t with n-2 degrees of freedom via
//! `statrs`, matching the usual two-sided test for a correlation
//! coefficient.

use crate::error::{AnalyticsError, AnalyticsResult};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// A correlation coefficient with its two-sided p-value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    /// Pearson correlation coefficient, in [-1, 1]
    pub r: f64,
    /// Two-sided significance value
    pub p_value: f64,
}

/// Compute the Pearson correlation between two paired series
///
/// Requires at least 3 paired observations and nonzero variance on both
/// sides; degenerate input is an error rather than a NaN.
pub fn pearson(x: &[f64], y: &[f64]) -> AnalyticsResult<Correlation> {
    if x.len() != y.len() {
        return Err(AnalyticsError::Stats(format!(
            "paired series length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }

    let n = x.len();
    if n < 3 {
        return Err(AnalyticsError::Stats(format!(
            "need at least 3 paired observations, got {n}"
        )));
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 {
        return Err(AnalyticsError::constant_series("x"));
    }
    if var_y <= 0.0 {
        return Err(AnalyticsError::constant_series("y"));
    }

    // sqrt of the product keeps r exactly 1.0 for a series against itself
    let r = (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0);

    // Perfect correlation leaves no residual variance for the t statistic
    let residual = 1.0 - r * r;
    let p_value = if residual <= f64::EPSILON {
        0.0
    } else {
        let df = (n - 2) as f64;
        let t = r.abs() * (df / residual).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| AnalyticsError::Stats(e.to_string()))?;
        2.0 * (1.0 - dist.cdf(t))
    };

    Ok(Correlation { r, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_correlation_is_one() {
        let x = [12_000.0, 9_500.0, 15_000.0, 3_000.0, 2_000.0];
        let corr = pearson(&x, &x).unwrap();
        assert_eq!(corr.r, 1.0);
        assert_eq!(corr.p_value, 0.0);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 8.0, 6.0, 4.0, 2.0];
        let corr = pearson(&x, &y).unwrap();
        assert!((corr.r - -1.0).abs() < 1e-12);
        assert_eq!(corr.p_value, 0.0);
    }

    #[test]
    fn test_known_coefficient() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 4.0];
        let corr = pearson(&x, &y).unwrap();
        assert!((corr.r - 0.981_980_506).abs() < 1e-6);
        assert!(corr.p_value > 0.0 && corr.p_value < 1.0);
    }

    #[test]
    fn test_symmetry() {
        let x = [1.0, 5.0, 2.0, 8.0, 3.0];
        let y = [2.0, 4.0, 4.0, 9.0, 1.0];
        let a = pearson(&x, &y).unwrap();
        let b = pearson(&y, &x).unwrap();
        assert!((a.r - b.r).abs() < 1e-12);
        assert!((a.p_value - b.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series_is_error() {
        let x = [1.0, 1.0, 1.0];
        let y = [1.0, 2.0, 3.0];
        assert!(pearson(&x, &y).unwrap_err().is_stats());
    }

    #[test]
    fn test_too_few_observations() {
        assert!(pearson(&[1.0, 2.0], &[3.0, 4.0]).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        assert!(pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
    }
}
