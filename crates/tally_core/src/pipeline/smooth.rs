//! Round-half-up conversion of floating-point values to integers.

/// Rounds `value` to the nearest integer, with halves going toward positive
/// infinity: `floor(value + 0.5)`.
///
/// Values beyond the `i64` range saturate; NaN maps to `0`.
///
/// # Examples
/// ```
/// use tally_core::smooth_value;
///
/// assert_eq!(smooth_value(1.5), 2);
/// assert_eq!(smooth_value(-0.5), 0);
/// assert_eq!(smooth_value(-1.2), -1);
/// ```
#[inline]
pub fn smooth_value(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Smooths every element of `values` into a new integer vector of the same
/// length. The input is left untouched.
///
/// # Examples
/// ```
/// use tally_core::smooth_values;
///
/// assert_eq!(smooth_values(&[0.4, 0.5, 1.5, -0.5]), vec![0, 1, 2, 0]);
/// ```
pub fn smooth_values(values: &[f64]) -> Vec<i64> {
    values.iter().map(|&value| smooth_value(value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_values_round_up() {
        assert_eq!(smooth_values(&[0.4, 0.5, 1.5, -0.5]), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_negative_halves_round_toward_positive_infinity() {
        assert_eq!(smooth_values(&[-1.5, -2.5, -0.51]), vec![-1, -2, -1]);
    }

    #[test]
    fn test_negative_values_floor_rather_than_truncate() {
        // floor(-1.2 + 0.5) = floor(-0.7) = -1; truncation would give 0.
        assert_eq!(smooth_value(-1.2), -1);
        assert_eq!(smooth_value(-0.7), -1);
    }

    #[test]
    fn test_integer_valued_input_is_unchanged() {
        assert_eq!(smooth_values(&[2.0, 5.0]), vec![2, 5]);
        assert_eq!(smooth_values(&[-3.0, 0.0, -0.0]), vec![-3, 0, 0]);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(smooth_values(&[]).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let values = vec![1.25, 2.75];
        let smoothed = smooth_values(&values);
        assert_eq!(values, vec![1.25, 2.75]);
        assert_eq!(smoothed, vec![1, 3]);
    }

    #[test]
    fn test_non_finite_values_saturate() {
        assert_eq!(smooth_value(f64::INFINITY), i64::MAX);
        assert_eq!(smooth_value(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(smooth_value(f64::NAN), 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_smoothing_moves_at_most_half(x in -1.0e6_f64..1.0e6) {
                let rounded = smooth_value(x) as f64;
                prop_assert!((x - rounded).abs() <= 0.5 + 1e-9);
            }

            #[test]
            fn test_smoothing_integers_is_idempotent(n in -1_000_000_i64..1_000_000) {
                prop_assert_eq!(smooth_value(n as f64), n);
            }
        }
    }
}
