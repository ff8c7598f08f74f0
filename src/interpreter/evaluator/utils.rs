use crate::interpreter::value::core::Value;

/// Builds the error value a builtin returns for an argument of the wrong
/// kind.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::utils::unsupported_argument, value::core::Value};
///
/// let error = unsupported_argument("len", &Value::Integer(1));
/// assert_eq!(error.to_string(), "ERROR: argument to len not supported, got INTEGER");
/// ```
#[must_use]
pub fn unsupported_argument(builtin: &str, argument: &Value) -> Value {
    Value::Error(format!("argument to {builtin} not supported, got {}", argument.type_name()))
}

/// Builds the error value for the argument at `position` (counting from 1)
/// when it must be of kind `expected`.
#[must_use]
pub fn expected_argument(builtin: &str, position: usize, expected: &str, got: &Value) -> Value {
    Value::Error(format!("argument {position} to {builtin} must be {expected}, got {}",
                         got.type_name()))
}
