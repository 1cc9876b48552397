//! Most frequent value of a sequence.
//!
//! Grouping uses exact `==`: near-duplicates such as `0.1 + 0.2` and `0.3`
//! are distinct values, `-0.0` and `0.0` are the same value, and `NaN`
//! never matches anything (including itself).

use crate::error::{Result, StatsError};

/// Winning value of [`mode`] together with its occurrence count.
///
/// # Examples
/// ```
/// use tally_core::{mode, Mode};
///
/// assert_eq!(mode(&[1, 2, 2, 3]).unwrap(), Mode { value: 2, count: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode<T> {
    /// The most frequent value (first encountered on ties).
    pub value: T,
    /// Number of exact matches of `value` in the sequence.
    pub count: usize,
}

/// Most frequent value of `nums` and how often it occurs.
///
/// Every element is taken as a candidate and its exact matches are counted
/// with a nested scan (O(n²)). The running result starts as the first
/// element with count 1 and is replaced only on a strictly greater count, so
/// a value needs at least two occurrences to displace the default and ties go
/// to the value that reached the maximum first.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `nums` is empty.
///
/// # Examples
/// ```
/// use tally_core::mode;
///
/// let m = mode(&[1.5, 2.5, 2.5, 1.5]).unwrap();
/// assert_eq!((m.value, m.count), (1.5, 2));
///
/// // All distinct: the first element wins with count 1.
/// let m = mode(&[9, 8, 7]).unwrap();
/// assert_eq!((m.value, m.count), (9, 1));
/// ```
pub fn mode<T: PartialEq + Copy>(nums: &[T]) -> Result<Mode<T>> {
    let &first = nums
        .first()
        .ok_or(StatsError::EmptyInput { operation: "mode" })?;

    let mut best = Mode {
        value: first,
        count: 1,
    };
    for &candidate in nums {
        let count = nums.iter().filter(|&&other| candidate == other).count();
        if count > best.count {
            best = Mode {
                value: candidate,
                count,
            };
        }
    }
    Ok(best)
}

/// Occurrence count of the mode of `nums`.
///
/// Reports how many times the mode occurs, not the mode itself. Use
/// [`mode()`] when the value is needed.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] if `nums` is empty.
///
/// # Examples
/// ```
/// use tally_core::mode_count;
///
/// assert_eq!(mode_count(&[1.0, 2.0, 2.0, 3.0]).unwrap(), 2);
/// ```
pub fn mode_count<T: PartialEq + Copy>(nums: &[T]) -> Result<usize> {
    if nums.is_empty() {
        return Err(StatsError::EmptyInput {
            operation: "mode_count",
        });
    }
    mode(nums).map(|m| m.count)
}
