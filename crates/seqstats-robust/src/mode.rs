//! Mode of a sample
//!
//! Once the values are sorted, equal values form contiguous runs and the
//! mode is the value of the longest run.

use crate::traits::BatchEstimator;
use seqstats_core::Numeric;

/// Most frequent value estimator
///
/// A run only replaces the current best when it is strictly longer, so among
/// equally frequent values the smallest wins. This holds for the final run
/// too: it is compared after the scan with the same strict test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode;

impl<T: Numeric> BatchEstimator<T> for Mode {
    type Output = T;

    fn name(&self) -> &str {
        "Mode"
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> T {
        let Some(&first) = sorted_data.first() else {
            return T::zero();
        };

        let mut best = first;
        let mut best_len = 0usize;
        let mut run = first;
        let mut run_len = 0usize;

        for &value in sorted_data {
            if value != run {
                if run_len > best_len {
                    best = run;
                    best_len = run_len;
                }
                run = value;
                run_len = 0;
            }
            run_len += 1;
        }

        if run_len > best_len {
            best = run;
        }

        best
    }
}

/// Mode of unsorted data
pub fn mode<T: Numeric>(data: &[T]) -> T {
    Mode.estimate(data)
}

/// Mode of sorted data
pub fn mode_sorted<T: Numeric>(sorted_data: &[T]) -> T {
    Mode.estimate_sorted(sorted_data)
}
