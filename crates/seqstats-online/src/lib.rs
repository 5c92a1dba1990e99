//! Online (streaming) statistics
//!
//! [`OnlineAccumulator`] tracks the running mean and variance of a stream
//! using Welford's update. Values can be retracted, which makes it usable as
//! the incremental core of a sliding window, and the accumulator can be
//! frozen once a stream is complete.
//!
//! Accumulators are not meant to be shared between threads while mutating;
//! give each worker its own.

pub mod accumulator;

pub use accumulator::{OnlineAccumulator, MAX_COUNT};
