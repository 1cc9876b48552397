//! Linear search by exact equality.
//!
//! Unlike the statistics, these functions accept empty input: an empty
//! slice simply contains nothing.

/// Returns `true` if any element of `nums` equals `target`.
///
/// # Examples
/// ```
/// use tally_core::contains;
///
/// assert!(contains(&[0.12, 4.56, 9.01], 4.56));
/// assert!(!contains(&[0.12, 4.56, 9.01], 4.5));
/// ```
pub fn contains<T: PartialEq>(nums: &[T], target: T) -> bool {
    nums.iter().any(|num| *num == target)
}

/// Index of the first element equal to `target`.
pub fn first_index_of<T: PartialEq>(nums: &[T], target: T) -> Option<usize> {
    nums.iter().position(|num| *num == target)
}

/// Index of the last element equal to `target`.
///
/// A full forward scan that keeps overwriting the remembered index ends on
/// the last match; this returns the same index by scanning from the back.
///
/// # Examples
/// ```
/// use tally_core::last_index_of;
///
/// assert_eq!(last_index_of(&[1, 2, 1, 3], 1), Some(2));
/// assert_eq!(last_index_of(&[1, 2, 1, 3], 4), None);
/// ```
pub fn last_index_of<T: PartialEq>(nums: &[T], target: T) -> Option<usize> {
    nums.iter().rposition(|num| *num == target)
}
