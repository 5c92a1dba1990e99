//! Descriptive statistics for sequencing pipelines
//!
//! `seqstats` bundles three ways of summarizing numeric measurements:
//!
//! - [`OnlineAccumulator`]: streaming mean/variance with retraction and
//!   one-way finalization (`seqstats-online`)
//! - [`SampleStatistics`] and the free estimators: outlier-trimmed
//!   mean/stddev, mode, median/MAD and EMA over raw samples
//!   (`seqstats-robust`)
//! - [`HistogramStatistics`]: the same aggregates from a dense
//!   count-per-value array for huge integer populations
//!   (`seqstats-histogram`)
//!
//! The two batch strategies implement [`DescriptiveStatistics`], so callers
//! can pick one by value range and cardinality without changing the code
//! that reads the results.
//!
//! # Example
//!
//! ```rust
//! use seqstats::prelude::*;
//!
//! fn report<S: DescriptiveStatistics>(stats: &S) -> (u64, f64) {
//!     (stats.number_of_objects(), stats.mean())
//! }
//!
//! let reads = [100usize, 98, 101, 100, 99];
//!
//! let sample: SampleStatistics<usize> = reads.iter().copied().collect();
//! let mut histogram = HistogramStatistics::with_capacity(128)?;
//! histogram.extend(reads);
//!
//! assert_eq!(report(&sample), report(&histogram));
//!
//! let mut online = OnlineAccumulator::<usize>::new();
//! for len in reads {
//!     online.insert(len)?;
//! }
//! assert!((online.mean() - 99.6).abs() < 1e-12);
//! # Ok::<(), seqstats::Error>(())
//! ```

pub use seqstats_core::{numeric, DescriptiveStatistics, Error, Numeric, Result, Summary};
pub use seqstats_histogram::{HistogramConfig, HistogramStatistics, DEFAULT_INITIAL_CAPACITY};
pub use seqstats_online::{OnlineAccumulator, MAX_COUNT};
pub use seqstats_robust::{
    ema_series, exponential_moving_average, median_mad, median_mad_sorted, mode, mode_sorted,
    trimmed_mean_stddev, trimmed_mean_stddev_sorted, BatchEstimator, ExponentialMovingAverage,
    MedianAbsoluteDeviation, MedianDeviation, Mode, SampleStatistics, TrimmedMeanStd,
    TrimmedMoments, OUTLIER_SPREAD_MULTIPLIER,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BatchEstimator, DescriptiveStatistics, Error, HistogramStatistics, Numeric,
        OnlineAccumulator, Result, SampleStatistics, Summary,
    };
}
