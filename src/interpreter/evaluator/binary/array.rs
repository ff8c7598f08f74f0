use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{ArrayCell, Value},
    },
};

/// Largest number of elements a range expression may produce.
pub const MAX_RANGE_LENGTH: i64 = 10_000_000;

impl Context {
    /// Concatenates two arrays into a new array. Neither operand is
    /// modified.
    pub(crate) fn concat_arrays(left: &ArrayCell, right: &ArrayCell) -> Value {
        let mut elements = left.borrow().clone();
        elements.extend(right.borrow().iter().cloned());
        Value::from(elements)
    }

    /// Evaluates a range into an array of integers.
    ///
    /// `a..b` includes `b`, `a...b` stops before it. A range whose end lies
    /// before its start is empty.
    ///
    /// # Errors
    /// `InvalidRange` if either bound is not an integer, `RangeTooLarge` if
    /// the range would hold more than [`MAX_RANGE_LENGTH`] elements.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let inclusive = Context::eval_range(&Value::Integer(1), &Value::Integer(3), true).unwrap();
    /// assert_eq!(inclusive.to_string(), "[1, 2, 3]");
    ///
    /// let exclusive = Context::eval_range(&Value::Integer(1), &Value::Integer(3), false).unwrap();
    /// assert_eq!(exclusive.to_string(), "[1, 2]");
    ///
    /// assert!(Context::eval_range(&Value::Integer(1), &Value::from("x"), true).is_err());
    /// assert!(Context::eval_range(&Value::Integer(0), &Value::Integer(i64::MAX), false).is_err());
    /// ```
    pub fn eval_range(start: &Value, end: &Value, inclusive: bool) -> EvalResult<Value> {
        let (Value::Integer(start), Value::Integer(end)) = (start, end) else {
            return Err(RuntimeError::InvalidRange { start: start.type_name(),
                                                    end:   end.type_name(), });
        };

        if end < start {
            return Ok(Value::from(Vec::<Value>::new()));
        }

        let length = end.checked_sub(*start)
                        .and_then(|span| span.checked_add(i64::from(inclusive)));
        if length.is_none_or(|length| length > MAX_RANGE_LENGTH) {
            return Err(RuntimeError::RangeTooLarge { start: *start,
                                                     end:   *end,
                                                     limit: MAX_RANGE_LENGTH, });
        }

        let elements: Vec<Value> = if inclusive {
            (*start..=*end).map(Value::Integer).collect()
        } else {
            (*start..*end).map(Value::Integer).collect()
        };

        Ok(Value::from(elements))
    }
}
