//! Shared utilities for integration tests

pub const EPSILON: f64 = 1e-9;

/// Two-pass mean and sample standard deviation (n-1 denominator)
pub fn two_pass(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (mean, (ss / (n - 1.0)).sqrt())
}

/// Absolute tolerance for quantities on the order of `scale`
pub fn tolerance(scale: f64) -> f64 {
    EPSILON * scale.abs().max(1.0)
}

/// Largest magnitude in a sample
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
}
