use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// The operation is routed by operand kinds:
    /// - `and` / `or` accept any operands and combine their truthiness.
    /// - Two integers use checked integer arithmetic ([`Self::eval_integer_infix`]).
    /// - An integer with a float, or two floats, use float arithmetic.
    /// - Two strings concatenate and compare ([`Self::eval_string_infix`]).
    /// - Two arrays concatenate with `+`.
    /// - Everything else only supports `==` and `!=`.
    ///
    /// # Errors
    /// - `TypeMismatch` when operands of different kinds meet an operator
    ///   that is not defined for them.
    /// - `UnknownInfixOperator` when operands of the same kind do not
    ///   support the operator.
    /// - Arithmetic errors raised by the numeric handlers.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_infix(InfixOperator::Add, &Value::Integer(3), &Value::Float(0.5));
    /// assert_eq!(sum.unwrap(), Value::Float(3.5));
    ///
    /// let err = Context::eval_infix(InfixOperator::Add, &Value::Integer(5), &Value::Boolean(true))
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Array, Float, Integer, Str};

        match (operator, left, right) {
            (InfixOperator::And, ..) => Ok(Value::Boolean(left.is_truthy() && right.is_truthy())),
            (InfixOperator::Or, ..) => Ok(Value::Boolean(left.is_truthy() || right.is_truthy())),
            (_, Integer(a), Integer(b)) => Self::eval_integer_infix(operator, *a, *b),
            (_, Integer(_) | Float(_), Integer(_) | Float(_)) => {
                Self::eval_float_infix(operator, left, right)
            },
            (_, Str(a), Str(b)) => Self::eval_string_infix(operator, a, b),
            (InfixOperator::Add, Array(a), Array(b)) => Ok(Self::concat_arrays(a, b)),
            (InfixOperator::Equal, ..) => Ok(Value::Boolean(left.same_as(right))),
            (InfixOperator::NotEqual, ..) => Ok(Value::Boolean(!left.same_as(right))),
            _ => Err(unsupported(operator, left, right)),
        }
    }
}

/// Builds the error for an operator that the operand kinds do not support.
pub(crate) fn unsupported(operator: InfixOperator, left: &Value, right: &Value) -> RuntimeError {
    let (left, right) = (left.type_name(), right.type_name());

    if left == right {
        RuntimeError::UnknownInfixOperator { left,
                                             operator,
                                             right }
    } else {
        RuntimeError::TypeMismatch { left,
                                     operator,
                                     right }
    }
}
