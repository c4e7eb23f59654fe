//! Interval Feature Extraction
//!
//! Computes per-interval statistics (mean, sample standard deviation, OLS
//! slope against the time index) over stacked equal-length time series,
//! producing a flat feature matrix for downstream modeling.

mod error;
mod extractor;
mod intervals;
mod stats;

pub use error::FeatureError;
pub use extractor::{extract, ExtractorConfig, FeatureExtractor, RowCountPolicy, STATS_PER_INTERVAL};
pub use intervals::{Interval, IntervalTable};
pub use stats::{mean, slope, std_dev};
