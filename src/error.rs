//! Custom error types for cpam-analytics
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cpam-analytics operations
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Statistical computation errors (empty series, degenerate input)
    #[error("Statistics error: {0}")]
    Stats(String),

    /// Report generation errors
    #[error("Report error: {0}")]
    Report(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl AnalyticsError {
    /// Create a statistics error for an empty input series
    pub fn empty_series(context: impl Into<String>) -> Self {
        Self::Stats(format!("empty series: {}", context.into()))
    }

    /// Create a statistics error for a constant (zero-variance) series
    pub fn constant_series(context: impl Into<String>) -> Self {
        Self::Stats(format!("constant series: {}", context.into()))
    }

    /// Check if this is a statistics error
    pub fn is_stats(&self) -> bool {
        matches!(self, Self::Stats(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cpam-analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
