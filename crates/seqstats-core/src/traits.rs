//! Core traits for descriptive statistics providers

use serde::Serialize;

/// Snapshot of the aggregates a provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary<V> {
    /// Number of observations
    pub count: u64,
    /// Mean (outlier-trimmed for raw samples)
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator)
    pub stddev: f64,
    /// Most frequent value
    pub mode: V,
    /// Median, taking the element at `n/2` for raw samples
    pub median: V,
    /// Median absolute deviation
    pub mad: V,
}

/// A batch strategy computing descriptive statistics over a collected sample
///
/// Two implementations exist: one over raw values and one over a dense
/// count-per-value histogram. They agree on mean and standard deviation for
/// the same multiset (up to outlier trimming), but their representations
/// differ enough that they share no code.
///
/// Accessors take `&self`; implementations recompute lazily after mutation.
pub trait DescriptiveStatistics {
    /// Type of order statistics (mode, median, MAD)
    type Value: Copy;

    /// Number of observations
    fn number_of_objects(&self) -> u64;

    /// Mean of the observations
    fn mean(&self) -> f64;

    /// Standard deviation of the observations
    fn stddev(&self) -> f64;

    /// Most frequent observation; lowest value on ties
    fn mode(&self) -> Self::Value;

    /// Median observation
    fn median(&self) -> Self::Value;

    /// Median absolute deviation from [`DescriptiveStatistics::median`]
    fn mad(&self) -> Self::Value;

    /// Collect all aggregates at once
    fn summary(&self) -> Summary<Self::Value> {
        Summary {
            count: self.number_of_objects(),
            mean: self.mean(),
            stddev: self.stddev(),
            mode: self.mode(),
            median: self.median(),
            mad: self.mad(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl DescriptiveStatistics for Fixed {
        type Value = u32;

        fn number_of_objects(&self) -> u64 {
            4
        }
        fn mean(&self) -> f64 {
            2.5
        }
        fn stddev(&self) -> f64 {
            1.0
        }
        fn mode(&self) -> u32 {
            1
        }
        fn median(&self) -> u32 {
            3
        }
        fn mad(&self) -> u32 {
            1
        }
    }

    #[test]
    fn test_summary_collects_accessors() {
        let summary = Fixed.summary();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mode, 1);
        assert_eq!(summary.median, 3);
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_string(&Fixed.summary()).unwrap();
        assert!(json.contains("\"count\":4"));
        assert!(json.contains("\"median\":3"));
    }
}
