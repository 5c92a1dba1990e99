//! Core traits for batch estimation

use seqstats_core::numeric::sorted_copy;
use seqstats_core::Numeric;

/// A stateless estimator over a complete sample
///
/// Every estimator works on ascending data. [`estimate`](Self::estimate)
/// sorts a private copy so the caller's ordering is never disturbed;
/// [`estimate_sorted`](Self::estimate_sorted) skips the sort for callers that
/// already hold sorted data (or want to share one sort between estimators).
pub trait BatchEstimator<T: Numeric> {
    /// Result of the estimation
    type Output;

    /// Get the name of this estimator
    fn name(&self) -> &str;

    /// Estimate from unsorted data
    fn estimate(&self, data: &[T]) -> Self::Output {
        let sorted = sorted_copy(data);
        self.estimate_sorted(&sorted)
    }

    /// Estimate from data already in ascending order
    fn estimate_sorted(&self, sorted_data: &[T]) -> Self::Output;
}
