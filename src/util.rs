/// Numeric conversion helpers.
///
/// This module provides the checked conversions the evaluator needs between
/// `i64`, `usize`, `u32` and `f64`: index and slice bounds, shift amounts
/// and float truncation. Each one either converts exactly or reports that
/// the value does not fit, so no conversion silently wraps.
pub mod num;
