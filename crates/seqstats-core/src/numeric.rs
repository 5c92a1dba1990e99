//! Numeric element trait for sample values
//!
//! Samples coming out of a sequencing pipeline are mostly integers (read
//! lengths, depths, counts) but some are real-valued (identities, ratios).
//! The estimators are generic over [`Numeric`]; aggregates that need
//! fractional precision (mean, standard deviation) are always reported as
//! `f64`, while order statistics (mode, median, MAD) keep the element type.

use num_traits::Num;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Base trait for numeric types that can be fed to the estimators
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert to f64 for aggregate arithmetic
    fn to_f64(self) -> f64;

    /// Absolute difference `|self - other|`, computed without unsigned underflow
    ///
    /// Integer types saturate at their maximum when the difference is not
    /// representable, e.g. `i32::MIN.distance(i32::MAX) == i32::MAX`.
    fn distance(self, other: Self) -> Self {
        if self < other {
            other - self
        } else {
            self - other
        }
    }

    /// Total ordering for sorting; incomparable values (NaN) compare equal
    fn order(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn distance(self, other: Self) -> Self {
                    <$t>::try_from(self.abs_diff(other)).unwrap_or(<$t>::MAX)
                }
            }
        )*
    };
}

impl_numeric_float!(f64, f32);
impl_numeric_int!(i32, u32, i64, u64, usize);

/// Sort values ascending in place
pub fn sort_ascending<T: Numeric>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| a.order(b));
}

/// Return a sorted copy, leaving the caller's ordering untouched
pub fn sorted_copy<T: Numeric>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sort_ascending(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(5u32.to_f64(), 5.0);
        assert_eq!((-3i64).to_f64(), -3.0);
        assert_eq!(2.5f32.to_f64(), 2.5);
        assert_eq!(7usize.to_f64(), 7.0);
    }

    #[test]
    fn test_distance_does_not_underflow() {
        assert_eq!(3u64.distance(10), 7);
        assert_eq!(10u64.distance(3), 7);
        assert_eq!((-2i32).distance(2), 4);
        assert_eq!(1.5f64.distance(-1.0), 2.5);
    }

    #[test]
    fn test_signed_distance_saturates() {
        assert_eq!(i32::MIN.distance(i32::MAX), i32::MAX);
        assert_eq!(i32::MAX.distance(i32::MIN), i32::MAX);
        assert_eq!(i32::MIN.distance(0), i32::MAX);
        assert_eq!((-20i64).distance(i64::MAX - 10), i64::MAX);
        assert_eq!(i64::MIN.distance(-1), i64::MAX);
        assert_eq!(u64::MAX.distance(0), u64::MAX);
    }

    #[test]
    fn test_sorted_copy_leaves_input() {
        let data = vec![3u32, 1, 2];
        let sorted = sorted_copy(&data);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_with_nan_does_not_panic() {
        let mut data = vec![2.0, f64::NAN, 1.0];
        sort_ascending(&mut data);
        assert_eq!(data.len(), 3);
    }
}
