//! Interval Feature Extraction over Stacked Series

use crate::error::FeatureError;
use crate::intervals::IntervalTable;
use crate::stats;
use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Statistics emitted per interval, in output order: mean, std_dev, slope
pub const STATS_PER_INTERVAL: usize = 3;

/// Policy for a series matrix whose row count is not a multiple of the
/// series length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowCountPolicy {
    /// Return `RowCountMismatch` instead of guessing
    #[default]
    Reject,
    /// Floor-divide and ignore the trailing rows
    Truncate,
}

/// Extraction configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// How to treat a row count that is not a multiple of the series length
    pub row_count_policy: RowCountPolicy,
}

/// Extracts per-series statistical features over fixed intervals
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractorConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given config
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract the feature matrix from a stacked series matrix.
    ///
    /// `series` holds `tsn` series of `series_len` rows each, concatenated
    /// vertically and sharing columns. `intervals` is an I x 2 table of
    /// 1-based inclusive (start, end) bounds within one series.
    ///
    /// The result has one row per series and `cols * I * 3` columns, ordered
    /// data column outermost, then interval in table order, then statistic
    /// (mean, sample standard deviation, OLS slope against 1..n). Intervals
    /// of length 1 yield NaN for standard deviation and slope; the mean is
    /// still finite.
    ///
    /// All inputs are validated before any slicing; no partial result is
    /// ever returned.
    pub fn extract(
        &self,
        series_len: usize,
        series: &Array2<f64>,
        intervals: &Array2<f64>,
    ) -> Result<Array2<f64>, FeatureError> {
        if series_len < 1 {
            return Err(FeatureError::InvalidLength(series_len));
        }
        let table = IntervalTable::from_matrix(intervals, series_len)?;
        self.extract_with_table(series_len, series, &table)
    }

    /// Extract using an already-validated interval table.
    ///
    /// The table must have been validated against the same `series_len`.
    pub fn extract_with_table(
        &self,
        series_len: usize,
        series: &Array2<f64>,
        table: &IntervalTable,
    ) -> Result<Array2<f64>, FeatureError> {
        if series_len < 1 {
            return Err(FeatureError::InvalidLength(series_len));
        }
        if series.ncols() == 0 {
            return Err(FeatureError::EmptyInput("series matrix"));
        }

        let rows = series.nrows();
        if rows % series_len != 0 && self.config.row_count_policy == RowCountPolicy::Reject {
            return Err(FeatureError::RowCountMismatch { rows, series_len });
        }
        let tsn = rows / series_len;
        if tsn == 0 {
            return Err(FeatureError::RowCountMismatch { rows, series_len });
        }

        let cols = series.ncols();
        let out_cols = cols * table.len() * STATS_PER_INTERVAL;
        let mut out = Array2::<f64>::zeros((tsn, out_cols));

        debug!(
            "extracting features: {} series x {} steps, {} columns, {} intervals -> {} x {}",
            tsn,
            series_len,
            cols,
            table.len(),
            tsn,
            out_cols
        );

        for series_idx in 0..tsn {
            let offset = series_idx * series_len;
            let mut j = 0;
            for col in 0..cols {
                for interval in table.iter() {
                    let lo = offset + interval.start - 1;
                    let hi = offset + interval.end;
                    let slice = series.slice(s![lo..hi, col]);
                    out[[series_idx, j]] = stats::mean(slice);
                    out[[series_idx, j + 1]] = stats::std_dev(slice);
                    out[[series_idx, j + 2]] = stats::slope(slice);
                    j += STATS_PER_INTERVAL;
                }
            }
        }

        Ok(out)
    }
}

/// Extract features with the default configuration.
///
/// Pure convenience over [`FeatureExtractor`]; identical inputs always yield
/// identical output.
pub fn extract(
    series_len: usize,
    series: &Array2<f64>,
    intervals: &Array2<f64>,
) -> Result<Array2<f64>, FeatureError> {
    FeatureExtractor::default().extract(series_len, series, intervals)
}
