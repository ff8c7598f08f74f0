use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest float strictly above every `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` in magnitude round to the nearest representable
/// float, which matches how mixed arithmetic promotes its integer operand.
///
/// ## Example
/// ```
/// use monkey::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates a float towards zero, if the result fits in an `i64`.
///
/// ## Returns
/// - `Some(i64)`: The truncated value.
/// - `None`: If the value is NaN, infinite or out of range.
///
/// ## Example
/// ```
/// use monkey::util::num::f64_to_i64;
///
/// assert_eq!(f64_to_i64(3.9), Some(3));
/// assert_eq!(f64_to_i64(-3.9), Some(-3));
/// assert_eq!(f64_to_i64(f64::NAN), None);
/// assert_eq!(f64_to_i64(1e300), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= -I64_UPPER_BOUND && truncated < I64_UPPER_BOUND {
        Some(truncated as i64)
    } else {
        None
    }
}

/// Converts a length or position to an `i64`, saturating at `i64::MAX`.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Checks a point index against a collection of length `len`.
///
/// ## Returns
/// `Some(usize)` if `0 <= index < len`, otherwise `None`.
///
/// ## Example
/// ```
/// use monkey::util::num::index_within;
///
/// assert_eq!(index_within(2, 3), Some(2));
/// assert_eq!(index_within(3, 3), None);
/// assert_eq!(index_within(-1, 3), None);
/// ```
#[must_use]
pub fn index_within(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// Clamps a slice bound into `0..=len`.
///
/// ## Example
/// ```
/// use monkey::util::num::clamp_bound;
///
/// assert_eq!(clamp_bound(-4, 3), 0);
/// assert_eq!(clamp_bound(2, 3), 2);
/// assert_eq!(clamp_bound(99, 3), 3);
/// ```
#[must_use]
pub fn clamp_bound(bound: i64, len: usize) -> usize {
    usize::try_from(bound).map_or(0, |bound| bound.min(len))
}

/// Validates a shift amount.
///
/// ## Errors
/// `InvalidShift` unless `0 <= amount < 64`.
///
/// ## Example
/// ```
/// use monkey::util::num::shift_amount;
///
/// assert_eq!(shift_amount(3).unwrap(), 3);
/// assert!(shift_amount(64).is_err());
/// assert!(shift_amount(-1).is_err());
/// ```
pub fn shift_amount(amount: i64) -> EvalResult<u32> {
    u32::try_from(amount).ok()
                         .filter(|&amount| amount < i64::BITS)
                         .ok_or(RuntimeError::InvalidShift { amount })
}
