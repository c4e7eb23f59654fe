//! Feature Extraction Error Types

use thiserror::Error;

/// Errors raised while validating extraction inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Series length below 1
    #[error("series length must be at least 1, got {0}")]
    InvalidLength(usize),

    /// Matrix row count not divisible by the series length
    #[error("matrix has {rows} rows, which is not a multiple of series length {series_len}")]
    RowCountMismatch { rows: usize, series_len: usize },

    /// Interval bounds outside the series
    #[error("interval ({start}, {end}) violates 1 <= start <= end <= {series_len}")]
    InvalidInterval {
        start: i64,
        end: i64,
        series_len: usize,
    },

    /// Required input has no usable content
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
}
