//! Interval Table Parsing and Validation

use crate::error::FeatureError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// One inclusive, 1-based time-step range within a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// First time step (1-based, inclusive)
    pub start: usize,
    /// Last time step (1-based, inclusive)
    pub end: usize,
}

impl Interval {
    /// Number of time steps covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the interval covers a single time step
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Validated, ordered set of intervals for a fixed series length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTable {
    intervals: Vec<Interval>,
}

impl IntervalTable {
    /// Parse an I x 2 numeric table of (start, end) rows.
    ///
    /// Fractional entries are truncated toward zero before validation.
    /// Every row must satisfy 1 <= start <= end <= series_len; table order
    /// is preserved since it fixes the output column layout.
    pub fn from_matrix(table: &Array2<f64>, series_len: usize) -> Result<Self, FeatureError> {
        if table.ncols() != 2 {
            return Err(FeatureError::EmptyInput("interval table with 2 columns"));
        }
        if table.nrows() == 0 {
            return Err(FeatureError::EmptyInput("interval table"));
        }

        let mut intervals = Vec::with_capacity(table.nrows());
        for row in table.rows() {
            let start = row[0] as i64;
            let end = row[1] as i64;
            if start < 1 || end < start || end > series_len as i64 {
                return Err(FeatureError::InvalidInterval {
                    start,
                    end,
                    series_len,
                });
            }
            intervals.push(Interval {
                start: start as usize,
                end: end as usize,
            });
        }
        Ok(Self { intervals })
    }

    /// Build a table from (start, end) pairs, validated against series_len
    pub fn from_pairs(pairs: &[(usize, usize)], series_len: usize) -> Result<Self, FeatureError> {
        if pairs.is_empty() {
            return Err(FeatureError::EmptyInput("interval table"));
        }
        let mut intervals = Vec::with_capacity(pairs.len());
        for &(start, end) in pairs {
            if start < 1 || end < start || end > series_len {
                return Err(FeatureError::InvalidInterval {
                    start: start as i64,
                    end: end as i64,
                    series_len,
                });
            }
            intervals.push(Interval { start, end });
        }
        Ok(Self { intervals })
    }

    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the table holds no intervals (never true for a parsed table)
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate intervals in table order
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }
}
