//! Configuration for histogram-backed statistics

use seqstats_core::{Error, Result};

/// Initial number of count slots: one mebi-slot, enough for typical read lengths
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024 * 1024;

/// Construction parameters for [`HistogramStatistics`](crate::HistogramStatistics)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    /// Number of zero-filled count slots allocated up front
    pub initial_capacity: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl HistogramConfig {
    /// Set the initial capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::zero_capacity("Histogram"));
        }
        Ok(())
    }
}
