//! Property-based tests for the online accumulator

mod common;

use common::{max_abs, tolerance, two_pass};
use proptest::prelude::*;
use seqstats_core::Error;
use seqstats_online::OnlineAccumulator;

proptest! {
    // Property: Welford matches the two-pass mean and sample standard deviation
    #[test]
    fn prop_matches_two_pass(values in prop::collection::vec(-1.0e6..1.0e6f64, 1..300)) {
        let mut acc = OnlineAccumulator::<f64>::new();
        for &v in &values {
            acc.insert(v).unwrap();
        }

        let (mean, stddev) = two_pass(&values);
        let scale = max_abs(&values);

        prop_assert_eq!(acc.size() as usize, values.len());
        prop_assert!((acc.mean() - mean).abs() <= tolerance(scale),
            "mean {} vs {}", acc.mean(), mean);
        prop_assert!((acc.stddev() - stddev).abs() <= tolerance(scale),
            "stddev {} vs {}", acc.stddev(), stddev);
    }

    // Property: insert followed by remove of the same value is the identity
    #[test]
    fn prop_insert_remove_inverse(
        values in prop::collection::vec(-1.0e3..1.0e3f64, 0..100),
        extra in -1.0e3..1.0e3f64
    ) {
        let mut acc = OnlineAccumulator::<f64>::new();
        for &v in &values {
            acc.insert(v).unwrap();
        }
        let (size, mean, variance) = (acc.size(), acc.mean(), acc.variance());

        acc.insert(extra).unwrap();
        acc.remove(extra).unwrap();

        let scale = 1.0e3;
        prop_assert_eq!(acc.size(), size);
        prop_assert!((acc.mean() - mean).abs() <= tolerance(scale));
        prop_assert!((acc.variance() - variance).abs() <= tolerance(scale * scale));
    }

    // Property: a finalized accumulator rejects every mutation and keeps its values
    #[test]
    fn prop_finalize_locks(
        values in prop::collection::vec(-100.0..100.0f64, 0..50),
        probe in -100.0..100.0f64
    ) {
        let mut acc = OnlineAccumulator::<f64>::new();
        for &v in &values {
            acc.insert(v).unwrap();
        }
        acc.finalize();
        let frozen = acc.clone();

        let inserted = acc.insert(probe);
        prop_assert!(matches!(inserted, Err(Error::Finalized { .. })), "expected Err(Error::Finalized), got {:?}", inserted);
        let removed = acc.remove(probe);
        prop_assert!(matches!(removed, Err(Error::Finalized { .. })), "expected Err(Error::Finalized), got {:?}", removed);
        prop_assert_eq!(acc, frozen);
    }
}

#[test]
fn test_sliding_window_with_remove() {
    let stream: Vec<f64> = (0..50).map(|i| f64::from(i % 7) * 3.5).collect();
    let window = 10;

    let mut acc = OnlineAccumulator::<f64>::new();
    for (i, &v) in stream.iter().enumerate() {
        acc.insert(v).unwrap();
        if i >= window {
            acc.remove(stream[i - window]).unwrap();
        }
        if i + 1 >= window {
            let start = i + 1 - window;
            let (mean, stddev) = two_pass(&stream[start..=i]);
            assert!((acc.mean() - mean).abs() < 1e-9);
            assert!((acc.stddev() - stddev).abs() < 1e-9);
        }
    }
}

#[test]
fn test_errors_let_caller_continue() {
    let mut acc = OnlineAccumulator::<u64>::new();
    assert!(acc.remove(1).unwrap_err().is_state_violation());

    // A failed remove leaves the accumulator usable.
    acc.insert(4).unwrap();
    acc.insert(6).unwrap();
    assert_eq!(acc.size(), 2);
    assert!((acc.mean() - 5.0).abs() < 1e-12);
}

#[test]
fn test_streaming_report_with_diagnostics() -> anyhow::Result<()> {
    // Route library diagnostics to the test writer; ignore a subscriber set by another test.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("seqstats_online=debug"))
        .with_test_writer()
        .try_init();

    let mut acc = OnlineAccumulator::<u32>::new();
    for depth in [28, 31, 30, 29, 32] {
        acc.insert(depth)?;
    }
    tracing::info!(size = acc.size(), "stream consumed");

    acc.finalize();
    assert!(acc.is_finalized());
    assert!((acc.mean() - 30.0).abs() < 1e-12);
    assert!((acc.stddev() - 2.5f64.sqrt()).abs() < 1e-12);

    let err = acc.insert(33).unwrap_err();
    assert!(err.is_state_violation());
    Ok(())
}
