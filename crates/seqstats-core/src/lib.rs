//! Core traits and types for seqstats
//!
//! This crate holds what the statistics crates share: the error type, the
//! [`Numeric`] element trait, and the [`DescriptiveStatistics`] provider
//! interface implemented by both batch strategies.
//!
//! # Example
//!
//! ```rust
//! use seqstats_core::{numeric::sorted_copy, Numeric};
//!
//! let depths = vec![12u32, 3, 7];
//! let sorted = sorted_copy(&depths);
//! assert_eq!(sorted, vec![3, 7, 12]);
//! assert_eq!(sorted[1].to_f64(), 7.0);
//! ```

pub mod error;
pub mod numeric;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
pub use traits::{DescriptiveStatistics, Summary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{DescriptiveStatistics, Numeric, Result, Summary};
}
