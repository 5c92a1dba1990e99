//! Median and Median Absolute Deviation (MAD)
//!
//! The median is the element at index `n/2` of the sorted sample. For even
//! sizes that is the upper of the two central values, not their average.
//! The MAD applies the same rule to the sorted absolute deviations from
//! that median.

use crate::traits::BatchEstimator;
use seqstats_core::numeric::sort_ascending;
use seqstats_core::Numeric;

/// Median together with the MAD around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianDeviation<T> {
    pub median: T,
    pub mad: T,
}

/// Median absolute deviation estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedianAbsoluteDeviation;

impl<T: Numeric> BatchEstimator<T> for MedianAbsoluteDeviation {
    type Output = MedianDeviation<T>;

    fn name(&self) -> &str {
        "MAD"
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> MedianDeviation<T> {
        let n = sorted_data.len();
        if n == 0 {
            return MedianDeviation {
                median: T::zero(),
                mad: T::zero(),
            };
        }

        let median = sorted_data[n / 2];

        let mut deviations: Vec<T> = sorted_data.iter().map(|&v| v.distance(median)).collect();
        sort_ascending(&mut deviations);

        MedianDeviation {
            median,
            mad: deviations[n / 2],
        }
    }
}

/// Median and MAD of unsorted data
pub fn median_mad<T: Numeric>(data: &[T]) -> MedianDeviation<T> {
    MedianAbsoluteDeviation.estimate(data)
}

/// Median and MAD of sorted data
pub fn median_mad_sorted<T: Numeric>(sorted_data: &[T]) -> MedianDeviation<T> {
    MedianAbsoluteDeviation.estimate_sorted(sorted_data)
}
