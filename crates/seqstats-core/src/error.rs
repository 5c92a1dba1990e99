//! Error types for seqstats
//!
//! Provides a unified error type for all seqstats crates. Every contract
//! violation surfaces here as a value; nothing in the library aborts the
//! process or prints to the console.

use thiserror::Error;

/// Core error type for statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// The accumulator was finalized and can no longer be mutated
    #[error("Accumulator has been finalized; can't {operation} value")]
    Finalized { operation: &'static str },

    /// The accumulator holds no data
    #[error("Accumulator has no data; can't {operation} value")]
    Empty { operation: &'static str },

    /// The accumulator reached its representable maximum number of items
    #[error("Accumulator is full: at most {limit} values can be tracked")]
    CapacityExhausted { limit: u32 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (for histogram dumps)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a smoothing weight outside `[0, 1]`
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Smoothing weight {alpha} must be in [0, 1]"))
    }

    /// Create an error for a zero-sized allocation request
    pub fn zero_capacity(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} capacity must be positive"))
    }

    /// Returns true for misuse of a stateful object, as opposed to bad arguments
    pub fn is_state_violation(&self) -> bool {
        matches!(
            self,
            Self::Finalized { .. } | Self::Empty { .. } | Self::CapacityExhausted { .. }
        )
    }
}
