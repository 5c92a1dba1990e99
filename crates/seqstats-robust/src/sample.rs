//! Raw sample collection with lazily computed statistics

use crate::mad::{MedianAbsoluteDeviation, MedianDeviation};
use crate::mode::Mode;
use crate::traits::BatchEstimator;
use crate::trimmed::{TrimmedMeanStd, TrimmedMoments};
use seqstats_core::numeric::sorted_copy;
use seqstats_core::{DescriptiveStatistics, Numeric, Summary};
use std::cell::OnceCell;
use tracing::trace;

/// A growable sample whose aggregates are recomputed on the first read after a mutation
///
/// The mean and standard deviation are outlier-trimmed (see
/// [`TrimmedMeanStd`]); mode, median and MAD use every value. One sorted copy
/// is shared by the three estimators, which yields the same results as
/// letting each sort on its own.
///
/// The cache lives in a [`OnceCell`], so a `SampleStatistics` can be read
/// through a shared reference but cannot be shared between threads.
///
/// # Example
///
/// ```rust
/// use seqstats_core::DescriptiveStatistics;
/// use seqstats_robust::SampleStatistics;
///
/// let mut lengths = SampleStatistics::new();
/// for len in [150u32, 151, 150, 149, 150] {
///     lengths.add(len);
/// }
/// assert_eq!(lengths.mode(), 150);
/// assert_eq!(lengths.median(), 150);
/// assert_eq!(lengths.number_of_objects(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SampleStatistics<T: Numeric = f64> {
    values: Vec<T>,
    trimming: TrimmedMeanStd,
    cache: OnceCell<Summary<T>>,
}

impl<T: Numeric> Default for SampleStatistics<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> SampleStatistics<T> {
    /// Create an empty sample
    pub fn new() -> Self {
        Self::with_trimming(TrimmedMeanStd::default())
    }

    /// Create an empty sample using custom outlier bounds for mean/stddev
    pub fn with_trimming(trimming: TrimmedMeanStd) -> Self {
        Self {
            values: Vec::new(),
            trimming,
            cache: OnceCell::new(),
        }
    }

    /// Append a value, invalidating cached aggregates
    pub fn add(&mut self, value: T) {
        self.values.push(value);
        self.cache.take();
    }

    /// Raw values in insertion order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn finalized(&self) -> &Summary<T> {
        self.cache.get_or_init(|| {
            let sorted = sorted_copy(&self.values);

            let TrimmedMoments { mean, stddev, .. } = self.trimming.estimate_sorted(&sorted);
            let mode = Mode.estimate_sorted(&sorted);
            let MedianDeviation { median, mad } =
                MedianAbsoluteDeviation.estimate_sorted(&sorted);

            trace!(count = sorted.len(), mean, stddev, "recomputed sample statistics");

            Summary {
                count: sorted.len() as u64,
                mean,
                stddev,
                mode,
                median,
                mad,
            }
        })
    }
}

impl<T: Numeric> DescriptiveStatistics for SampleStatistics<T> {
    type Value = T;

    fn number_of_objects(&self) -> u64 {
        self.finalized().count
    }

    fn mean(&self) -> f64 {
        self.finalized().mean
    }

    fn stddev(&self) -> f64 {
        self.finalized().stddev
    }

    fn mode(&self) -> T {
        self.finalized().mode
    }

    fn median(&self) -> T {
        self.finalized().median
    }

    fn mad(&self) -> T {
        self.finalized().mad
    }

    fn summary(&self) -> Summary<T> {
        *self.finalized()
    }
}

impl<T: Numeric> Extend<T> for SampleStatistics<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
        self.cache.take();
    }
}

impl<T: Numeric> FromIterator<T> for SampleStatistics<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sample = Self::new();
        sample.extend(iter);
        sample
    }
}
