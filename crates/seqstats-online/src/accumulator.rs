//! Welford online mean and standard deviation
//!
//! B. P. Welford, Technometrics, Vol 4, No 3, Aug 1962 pp 419-420; also
//! Knuth Vol 2 (3rd Ed.) pp 232. Naive sum / sum-of-squares accumulation
//! loses precision for large counts or large magnitudes; the running update
//! here does not.

use seqstats_core::{Error, Numeric, Result};
use std::marker::PhantomData;
use tracing::debug;

/// Largest number of values an accumulator will track
pub const MAX_COUNT: u32 = 0x7fff_ffff;

/// Incremental mean/variance tracker supporting retraction and finalization
///
/// Before [`finalize`](Self::finalize) the accumulator stores the running sum
/// of squared deviations. Finalizing replaces it with the standard deviation
/// and freezes the object; after that [`variance`](Self::variance) reports
/// `stddev²` and every mutation is rejected.
///
/// # Example
///
/// ```rust
/// use seqstats_online::OnlineAccumulator;
///
/// let mut acc = OnlineAccumulator::<u32>::new();
/// for depth in [2, 4, 4, 4, 5, 5, 7, 9] {
///     acc.insert(depth).unwrap();
/// }
/// assert_eq!(acc.size(), 8);
/// assert!((acc.mean() - 5.0).abs() < 1e-12);
///
/// acc.finalize();
/// assert!(acc.insert(1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineAccumulator<T: Numeric = f64> {
    mean: f64,
    // Sum of squared deviations; holds the standard deviation once finalized.
    spread: f64,
    count: u32,
    finalized: bool,
    _phantom: PhantomData<T>,
}

impl<T: Numeric> Default for OnlineAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> OnlineAccumulator<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            mean: 0.0,
            spread: 0.0,
            count: 0,
            finalized: false,
            _phantom: PhantomData,
        }
    }

    /// Resume from a previously observed (mean, sum of squared deviations, count) triple
    pub fn resume(mean: f64, sum_of_squares: f64, count: u32) -> Result<Self> {
        if count > MAX_COUNT {
            return Err(Error::InvalidInput(format!(
                "Resumed count {count} exceeds the limit of {MAX_COUNT}"
            )));
        }
        if sum_of_squares < 0.0 {
            return Err(Error::InvalidInput(format!(
                "Sum of squared deviations {sum_of_squares} is negative"
            )));
        }

        Ok(Self {
            mean,
            spread: sum_of_squares,
            count,
            finalized: false,
            _phantom: PhantomData,
        })
    }

    /// Add a value
    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.finalized {
            debug!(operation = "insert", "rejected mutation of finalized accumulator");
            return Err(Error::Finalized { operation: "insert" });
        }
        if self.count == MAX_COUNT {
            debug!(limit = MAX_COUNT, "rejected insert into full accumulator");
            return Err(Error::CapacityExhausted { limit: MAX_COUNT });
        }

        let value = value.to_f64();
        let old_mean = self.mean;
        let n = self.count + 1;

        self.mean = old_mean + (value - old_mean) / f64::from(n);
        self.spread += (value - old_mean) * (value - self.mean);
        self.count = n;

        Ok(())
    }

    /// Retract a value previously passed to [`insert`](Self::insert)
    ///
    /// This is the algebraic inverse of `insert`, not a membership test:
    /// removing a value that was never inserted silently corrupts the state.
    pub fn remove(&mut self, value: T) -> Result<()> {
        if self.finalized {
            debug!(operation = "remove", "rejected mutation of finalized accumulator");
            return Err(Error::Finalized { operation: "remove" });
        }
        if self.count == 0 {
            return Err(Error::Empty { operation: "remove" });
        }

        let value = value.to_f64();
        let n = self.count - 1;
        let old_mean = if n == 0 {
            0.0
        } else {
            (f64::from(self.count) * self.mean - value) / f64::from(n)
        };

        self.spread -= (value - old_mean) * (value - self.mean);
        self.mean = old_mean;
        self.count = n;

        Ok(())
    }

    /// Freeze the accumulator, storing the standard deviation in place of the running sum
    ///
    /// Calling this on an already finalized accumulator does nothing.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }

        self.spread = self.stddev();
        self.finalized = true;
        debug!(count = self.count, mean = self.mean, stddev = self.spread, "finalized accumulator");
    }

    /// Whether [`finalize`](Self::finalize) has been called
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of values currently accumulated
    pub fn size(&self) -> u32 {
        self.count
    }

    /// Running mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (n-1 denominator), or `stddev²` once finalized
    pub fn variance(&self) -> f64 {
        if self.finalized {
            self.spread * self.spread
        } else if self.count < 2 {
            0.0
        } else {
            self.spread / f64::from(self.count - 1)
        }
    }

    /// Sample standard deviation
    pub fn stddev(&self) -> f64 {
        if self.finalized {
            self.spread
        } else {
            self.variance().sqrt()
        }
    }
}
