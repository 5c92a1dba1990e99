//! Histogram-backed descriptive statistics
//!
//! When a pipeline produces billions of small non-negative integers (read
//! lengths, per-base depths, k-mer counts) keeping every sample is wasteful
//! while keeping one counter per distinct value is cheap.
//! [`HistogramStatistics`] does exactly that and derives mean, standard
//! deviation, mode, median and MAD from the counts alone.
//!
//! # Examples
//!
//! ```rust
//! use seqstats_core::DescriptiveStatistics;
//! use seqstats_histogram::{HistogramConfig, HistogramStatistics};
//!
//! let config = HistogramConfig::default().initial_capacity(256);
//! let mut lengths = HistogramStatistics::with_config(config).unwrap();
//! lengths.extend([100, 101, 101, 102]);
//!
//! assert_eq!(lengths.mode(), 101);
//! assert!((lengths.mean() - 101.0).abs() < 1e-12);
//!
//! let mut table = Vec::new();
//! lengths.write_histogram(&mut table, "length").unwrap();
//! assert!(String::from_utf8(table).unwrap().starts_with("#length\tquantity\n0\t0\n"));
//! ```

pub mod config;
pub mod statistics;

pub use config::{HistogramConfig, DEFAULT_INITIAL_CAPACITY};
pub use statistics::HistogramStatistics;

pub use seqstats_core::Result;
