//! Robust descriptive statistics over raw samples
//!
//! This crate provides batch estimators for complete samples:
//! - Outlier-trimmed mean and standard deviation
//! - Mode (lowest value wins ties)
//! - Median and MAD (Median Absolute Deviation)
//! - Exponential moving average helpers
//!
//! and [`SampleStatistics`], a raw-value collection that caches all of them.
//!
//! # Overview
//!
//! The classical mean and standard deviation have a breakdown point of zero:
//! a single corrupt depth or read length can move them arbitrarily. The
//! trimmed estimator first brackets the sample around its median using a
//! tercile-based spread estimate and only then computes the moments.
//!
//! | Estimator | Sorted input | Empty input |
//! |-----------|--------------|-------------|
//! | Trimmed mean/std | `n/2`, `n/3`, `2n/3` order statistics | zeros |
//! | Mode | longest run, earliest on ties | zero |
//! | Median/MAD | element `n/2` | zeros |
//!
//! # Examples
//!
//! ```rust
//! use seqstats_robust::{median_mad, mode, trimmed_mean_stddev};
//!
//! let coverage = vec![30u32, 31, 29, 30, 32, 28, 30, 5000];
//!
//! let moments = trimmed_mean_stddev(&coverage);
//! assert_eq!(moments.retained, 7); // 5000 is dropped
//! assert!((moments.mean - 30.0).abs() < 1e-12);
//!
//! assert_eq!(mode(&coverage), 30);
//! let md = median_mad(&coverage);
//! assert_eq!(md.median, 30);
//! ```

pub mod ema;
pub mod mad;
pub mod mode;
pub mod sample;
pub mod traits;
pub mod trimmed;

// Re-exports
pub use ema::{ema_series, exponential_moving_average, ExponentialMovingAverage};
pub use mad::{median_mad, median_mad_sorted, MedianAbsoluteDeviation, MedianDeviation};
pub use mode::{mode, mode_sorted, Mode};
pub use sample::SampleStatistics;
pub use traits::BatchEstimator;
pub use trimmed::{
    trimmed_mean_stddev, trimmed_mean_stddev_sorted, TrimmedMeanStd, TrimmedMoments,
    OUTLIER_SPREAD_MULTIPLIER,
};
