//! Exponential moving average

use num_traits::Float;
use seqstats_core::{Error, Numeric, Result};

fn check_alpha<F: Float>(alpha: F) -> Result<()> {
    // NaN fails both comparisons.
    if alpha >= F::zero() && alpha <= F::one() {
        Ok(())
    } else {
        Err(Error::invalid_alpha(alpha.to_f64().unwrap_or(f64::NAN)))
    }
}

/// One EMA step: `alpha * value + (1 - alpha) * ema`
///
/// `alpha` must lie in `[0, 1]`; anything else is rejected rather than
/// producing an unbounded average.
pub fn exponential_moving_average<F: Float>(alpha: F, ema: F, value: F) -> Result<F> {
    check_alpha(alpha)?;
    Ok(alpha * value + (F::one() - alpha) * ema)
}

/// EMA of every prefix of `values`, starting from `initial`
pub fn ema_series<T: Numeric>(alpha: f64, initial: f64, values: &[T]) -> Result<Vec<f64>> {
    let mut tracker = ExponentialMovingAverage::new(alpha, initial)?;
    Ok(values.iter().map(|&v| tracker.update(v.to_f64())).collect())
}

/// Stateful EMA with a weight validated once at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialMovingAverage {
    alpha: f64,
    value: f64,
}

impl ExponentialMovingAverage {
    /// Create with a smoothing weight in `[0, 1]` and a starting average
    pub fn new(alpha: f64, initial: f64) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self {
            alpha,
            value: initial,
        })
    }

    /// Fold in an observation and return the new average
    pub fn update(&mut self, observation: f64) -> f64 {
        self.value = self.alpha * observation + (1.0 - self.alpha) * self.value;
        self.value
    }

    /// Current average
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Smoothing weight
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
