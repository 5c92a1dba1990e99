//! Outlier-trimmed mean and standard deviation
//!
//! The spread of the sample is approximated from its terciles: under a
//! normal assumption the values at `n/3` and `2n/3` sit roughly one standard
//! deviation-ish away from the median. Anything further than a multiple of
//! that spread from the median is dropped before computing the mean and the
//! sample standard deviation. No parametric fit is involved.

use crate::traits::BatchEstimator;
use seqstats_core::{Error, Numeric, Result};

/// Default number of approximate standard deviations kept on each side of the median
pub const OUTLIER_SPREAD_MULTIPLIER: f64 = 5.0;

/// Mean and standard deviation over the values that survived trimming
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrimmedMoments {
    /// Mean of the retained values
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator) of the retained values
    pub stddev: f64,
    /// Number of values inside the bounds
    pub retained: usize,
    /// Inclusive lower bound
    pub lower: f64,
    /// Inclusive upper bound
    pub upper: f64,
}

/// Trimmed mean/stddev estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedMeanStd {
    spread_multiplier: f64,
}

impl Default for TrimmedMeanStd {
    fn default() -> Self {
        Self {
            spread_multiplier: OUTLIER_SPREAD_MULTIPLIER,
        }
    }
}

impl TrimmedMeanStd {
    /// Create with the default five-spread bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom number of approximate standard deviations
    pub fn with_multiplier(spread_multiplier: f64) -> Result<Self> {
        if !(spread_multiplier.is_finite() && spread_multiplier >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Spread multiplier {spread_multiplier} must be finite and non-negative"
            )));
        }
        Ok(Self { spread_multiplier })
    }

    /// Get the spread multiplier
    pub fn spread_multiplier(&self) -> f64 {
        self.spread_multiplier
    }
}

impl<T: Numeric> BatchEstimator<T> for TrimmedMeanStd {
    type Output = TrimmedMoments;

    fn name(&self) -> &str {
        "Trimmed Mean/Std Dev"
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> TrimmedMoments {
        let n = sorted_data.len();
        if n == 0 {
            return TrimmedMoments::default();
        }

        // Bounds are derived in f64 so unsigned samples cannot underflow.
        let median = sorted_data[n / 2].to_f64();
        let one_third = sorted_data[n / 3].to_f64();
        let two_third = sorted_data[2 * n / 3].to_f64();

        let approx_std = (median - one_third).max(two_third - median);
        let lower = median - approx_std * self.spread_multiplier;
        let upper = median + approx_std * self.spread_multiplier;

        let start = sorted_data.partition_point(|v| v.to_f64() < lower);
        let end = sorted_data.partition_point(|v| v.to_f64() <= upper);
        let retained = &sorted_data[start..end.max(start)];

        let mut moments = TrimmedMoments {
            retained: retained.len(),
            lower,
            upper,
            ..TrimmedMoments::default()
        };
        if retained.is_empty() {
            return moments;
        }

        let count = retained.len() as f64;
        moments.mean = retained.iter().map(|v| v.to_f64()).sum::<f64>() / count;

        if retained.len() > 1 {
            let sum_of_squares: f64 = retained
                .iter()
                .map(|v| {
                    let d = v.to_f64() - moments.mean;
                    d * d
                })
                .sum();
            moments.stddev = (sum_of_squares / (count - 1.0)).sqrt();
        }

        moments
    }
}

/// Trimmed mean/stddev of unsorted data with the default bounds
pub fn trimmed_mean_stddev<T: Numeric>(data: &[T]) -> TrimmedMoments {
    TrimmedMeanStd::default().estimate(data)
}

/// Trimmed mean/stddev of sorted data with the default bounds
pub fn trimmed_mean_stddev_sorted<T: Numeric>(sorted_data: &[T]) -> TrimmedMoments {
    TrimmedMeanStd::default().estimate_sorted(sorted_data)
}
