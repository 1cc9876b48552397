//! Sum, average, minimum and maximum.
//!
//! All functions are generic over primitive numeric types through
//! `num_traits`, so the same routines serve integer and floating-point
//! slices.

use num_traits::{CheckedAdd, ToPrimitive, Zero};

use crate::error::{Result, StatsError};

/// Element type that can be accumulated by [`sum`] and [`average`].
///
/// Integer types add with overflow detection; floating-point types add with
/// IEEE semantics and never fail (overflow yields an infinity).
pub trait Summable: Copy + Zero {
    /// Returns `self + rhs`, or `None` if the result is not representable.
    fn accumulate(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_summable_checked {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                #[inline]
                fn accumulate(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

impl_summable_checked!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Summable for f32 {
    #[inline]
    fn accumulate(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl Summable for f64 {
    #[inline]
    fn accumulate(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

/// Arithmetic sum of `nums`, accumulated left to right in `T`.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `nums` is empty, and
/// [`StatsError::Overflow`] if an integer sum leaves the range of `T`.
///
/// # Examples
/// ```
/// use tally_core::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4]).unwrap(), 10);
/// assert!(sum::<i32>(&[]).is_err());
/// assert!(sum(&[i32::MAX, 1]).is_err());
/// ```
pub fn sum<T: Summable>(nums: &[T]) -> Result<T> {
    if nums.is_empty() {
        return Err(StatsError::EmptyInput { operation: "sum" });
    }
    nums.iter()
        .try_fold(T::zero(), |total, &num| total.accumulate(num))
        .ok_or(StatsError::Overflow { operation: "sum" })
}

/// Arithmetic mean of `nums` as `f64`.
///
/// Computed as `sum(nums) / len`, with the sum converted to `f64` before the
/// division. For `f64` input the result is bit-identical to
/// `sum(nums)? / nums.len() as f64`.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `nums` is empty, and
/// [`StatsError::Overflow`] if the integer sum overflows `T`.
///
/// # Examples
/// ```
/// use tally_core::average;
///
/// assert_eq!(average(&[1, 2, 3, 4]).unwrap(), 2.5);
/// ```
pub fn average<T: Summable + ToPrimitive>(nums: &[T]) -> Result<f64> {
    if nums.is_empty() {
        return Err(StatsError::EmptyInput {
            operation: "average",
        });
    }
    // Primitive numeric types always convert to f64 (possibly with rounding).
    let total = sum(nums)?.to_f64().unwrap_or(f64::NAN);
    Ok(total / nums.len() as f64)
}

/// Smallest element of `nums`.
///
/// Single linear scan seeded with the first element; the running minimum is
/// replaced only on a strict `<`.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `nums` is empty.
///
/// # Examples
/// ```
/// use tally_core::minimum;
///
/// assert_eq!(minimum(&[3.5, -1.25, 7.0]).unwrap(), -1.25);
/// ```
pub fn minimum<T: PartialOrd + Copy>(nums: &[T]) -> Result<T> {
    let (&first, rest) = nums.split_first().ok_or(StatsError::EmptyInput {
        operation: "minimum",
    })?;
    let mut smallest = first;
    for &val in rest {
        if val < smallest {
            smallest = val;
        }
    }
    Ok(smallest)
}

/// Largest element of `nums`.
///
/// Single linear scan seeded with the first element; the running maximum is
/// replaced only on a strict `>`.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `nums` is empty.
///
/// # Examples
/// ```
/// use tally_core::maximum;
///
/// assert_eq!(maximum(&[3.5, -1.25, 7.0]).unwrap(), 7.0);
/// ```
pub fn maximum<T: PartialOrd + Copy>(nums: &[T]) -> Result<T> {
    let (&first, rest) = nums.split_first().ok_or(StatsError::EmptyInput {
        operation: "maximum",
    })?;
    let mut largest = first;
    for &val in rest {
        if val > largest {
            largest = val;
        }
    }
    Ok(largest)
}
