//! Dense count-per-value histogram with lazily computed statistics

use crate::config::HistogramConfig;
use seqstats_core::{DescriptiveStatistics, Error, Result, Summary};
use std::cell::OnceCell;
use std::io::{BufWriter, Write};
use tracing::{debug, trace};

/// Memory-efficient statistics for large populations of small non-negative integers
///
/// Instead of storing every sample, a dense array holds one count per value.
/// All aggregates are derived by weighted sweeps over that array and cached
/// until the next [`add`](Self::add). The array at least doubles whenever a
/// value lands beyond the allocated capacity, so growth is amortized O(1) per
/// add even though each individual growth copies the array.
///
/// Median and MAD are the smallest indices whose inclusive cumulative count
/// reaches `ceil(n/2)`. For even `n` this is the lower of the two central
/// values, whereas the raw-sample `SampleStatistics` takes the upper one; odd
/// sizes agree.
///
/// # Example
///
/// ```rust
/// use seqstats_core::DescriptiveStatistics;
/// use seqstats_histogram::HistogramStatistics;
///
/// let mut depths = HistogramStatistics::with_capacity(16).unwrap();
/// depths.add_count(30, 1_000_000);
/// depths.add(400); // beyond capacity, the array grows
///
/// assert_eq!(depths.number_of_objects(), 1_000_001);
/// assert_eq!(depths.mode(), 30);
/// assert_eq!(depths.histogram(30), 1_000_000);
/// assert_eq!(depths.histogram_max(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct HistogramStatistics {
    counts: Vec<u64>,
    max_index: usize,
    cache: OnceCell<Summary<usize>>,
}

impl Default for HistogramStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl HistogramStatistics {
    /// Create an empty histogram with the default capacity
    pub fn new() -> Self {
        Self::allocate(HistogramConfig::default().initial_capacity)
    }

    /// Create an empty histogram from a configuration
    pub fn with_config(config: HistogramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::allocate(config.initial_capacity))
    }

    /// Create an empty histogram with room for values `0..capacity`
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(HistogramConfig::default().initial_capacity(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            counts: vec![0; capacity],
            max_index: 0,
            cache: OnceCell::new(),
        }
    }

    /// Record one observation of `value`
    ///
    /// # Panics
    ///
    /// Panics if the count array cannot grow to hold `value`; see
    /// [`try_add_count`](Self::try_add_count) for the fallible form.
    pub fn add(&mut self, value: usize) {
        self.add_count(value, 1);
    }

    /// Record `count` observations of `value`
    ///
    /// # Panics
    ///
    /// Panics if the count array cannot grow to hold `value`, as `Vec` does
    /// on capacity overflow.
    pub fn add_count(&mut self, value: usize, count: u64) {
        if let Err(err) = self.try_add_count(value, count) {
            panic!("{err}");
        }
    }

    /// Record `count` observations of `value`, failing instead of panicking
    /// when the count array cannot grow that far
    ///
    /// A failed call leaves the histogram unchanged.
    pub fn try_add_count(&mut self, value: usize, count: u64) -> Result<()> {
        if value >= self.counts.len() {
            self.grow(value)?;
        }

        if value > self.max_index {
            self.max_index = value;
        }

        self.counts[value] = self.counts[value].saturating_add(count);
        self.cache.take();
        Ok(())
    }

    fn grow(&mut self, value: usize) -> Result<()> {
        let old_capacity = self.counts.len();
        let needed = value.checked_add(1).ok_or_else(|| {
            Error::InvalidInput(format!("Value {value} is beyond the addressable histogram range"))
        })?;

        let mut capacity = old_capacity.max(1);
        while capacity < needed {
            capacity = capacity.checked_mul(2).unwrap_or(needed);
        }

        self.counts
            .try_reserve_exact(capacity - old_capacity)
            .map_err(|err| {
                Error::InvalidInput(format!(
                    "Cannot grow histogram to {capacity} slots for value {value}: {err}"
                ))
            })?;

        debug!(old_capacity, capacity, value, "growing histogram");
        self.counts.resize(capacity, 0);
        Ok(())
    }

    /// Count recorded for `value`; zero for anything never added
    pub fn histogram(&self, value: usize) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Largest value added so far (0 for an empty histogram)
    pub fn histogram_max(&self) -> usize {
        self.max_index
    }

    /// Number of allocated count slots
    pub fn capacity(&self) -> usize {
        self.counts.len()
    }

    /// Counts for values `0..=histogram_max()`
    pub fn counts(&self) -> &[u64] {
        &self.counts[..=self.max_index]
    }

    /// Write the dense two-column table, one line per value up to [`histogram_max`](Self::histogram_max)
    ///
    /// ```text
    /// #<label>\tquantity
    /// 0\t<count>
    /// 1\t<count>
    /// ```
    pub fn write_histogram<W: Write>(&self, writer: W, label: &str) -> Result<()> {
        let mut out = BufWriter::new(writer);

        writeln!(out, "#{label}\tquantity")?;
        for (value, count) in self.counts().iter().enumerate() {
            writeln!(out, "{value}\t{count}")?;
        }

        out.flush()?;
        Ok(())
    }

    fn finalized(&self) -> &Summary<usize> {
        self.cache.get_or_init(|| {
            let summary = summarize(self.counts());
            trace!(
                count = summary.count,
                mean = summary.mean,
                median = summary.median,
                "recomputed histogram statistics"
            );
            summary
        })
    }
}

/// Smallest index whose inclusive cumulative count reaches `threshold`
fn cumulative_index(counts: &[u64], threshold: u64) -> usize {
    let mut cumulative = 0u64;
    for (index, &count) in counts.iter().enumerate() {
        cumulative = cumulative.saturating_add(count);
        if cumulative >= threshold {
            return index;
        }
    }
    counts.len().saturating_sub(1)
}

fn summarize(counts: &[u64]) -> Summary<usize> {
    let mut summary = Summary {
        count: 0,
        mean: 0.0,
        stddev: 0.0,
        mode: 0,
        median: 0,
        mad: 0,
    };

    // Totals saturate like the individual buckets.
    summary.count = counts.iter().fold(0u64, |total, &count| total.saturating_add(count));
    if summary.count == 0 {
        return summary;
    }
    let n = summary.count as f64;

    let weighted: f64 = counts
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();
    summary.mean = weighted / n;

    if summary.count > 1 {
        let sum_of_squares: f64 = counts
            .iter()
            .enumerate()
            .map(|(value, &count)| {
                let d = value as f64 - summary.mean;
                count as f64 * d * d
            })
            .sum();
        summary.stddev = (sum_of_squares / (n - 1.0)).sqrt();
    }

    for (value, &count) in counts.iter().enumerate() {
        if count > counts[summary.mode] {
            summary.mode = value;
        }
    }

    let half = summary.count.div_ceil(2);
    summary.median = cumulative_index(counts, half);

    // Deviations never exceed the largest value, so the same length suffices.
    let mut deviations = vec![0u64; counts.len()];
    for (value, &count) in counts.iter().enumerate() {
        let slot = &mut deviations[value.abs_diff(summary.median)];
        *slot = slot.saturating_add(count);
    }
    summary.mad = cumulative_index(&deviations, half);

    summary
}

impl DescriptiveStatistics for HistogramStatistics {
    type Value = usize;

    fn number_of_objects(&self) -> u64 {
        self.finalized().count
    }

    fn mean(&self) -> f64 {
        self.finalized().mean
    }

    fn stddev(&self) -> f64 {
        self.finalized().stddev
    }

    fn mode(&self) -> usize {
        self.finalized().mode
    }

    fn median(&self) -> usize {
        self.finalized().median
    }

    fn mad(&self) -> usize {
        self.finalized().mad
    }

    fn summary(&self) -> Summary<usize> {
        *self.finalized()
    }
}

impl Extend<usize> for HistogramStatistics {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
