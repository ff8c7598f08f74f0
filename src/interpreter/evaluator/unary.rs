use crate::{
    ast::{Expression, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix operator applied to an already evaluated operand.
    ///
    /// Supported operations:
    /// - `!x` for any value: the negation of its truthiness.
    /// - `-x` for integers and floats. Negating `i64::MIN` overflows.
    /// - `~x` for integers: bitwise complement.
    ///
    /// # Errors
    /// `UnknownPrefixOperator` for any other combination.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let negated = Context::eval_prefix(PrefixOperator::Minus, &Value::Integer(5)).unwrap();
    /// assert_eq!(negated, Value::Integer(-5));
    ///
    /// let not = Context::eval_prefix(PrefixOperator::Bang, &Value::Integer(0)).unwrap();
    /// assert_eq!(not, Value::Boolean(false));
    ///
    /// assert!(Context::eval_prefix(PrefixOperator::Minus, &Value::Boolean(true)).is_err());
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
        match (operator, right) {
            (PrefixOperator::Bang, value) => Ok(Value::Boolean(!value.is_truthy())),
            (PrefixOperator::Minus, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::NegationOverflow { value: *n })
            },
            (PrefixOperator::Minus, Value::Float(x)) => Ok(Value::Float(-x)),
            (PrefixOperator::Tilde, Value::Integer(n)) => Ok(Value::Integer(!n)),
            (operator, value) => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                                           right: value.type_name(), }),
        }
    }

    /// Evaluates `x++`, `x--`, `++x` and `--x`.
    ///
    /// The operand must be an identifier bound to an integer or a float. The
    /// stepped value is rebound in the current scope. The postfix forms
    /// yield the old value, the prefix forms the new one.
    pub(crate) fn eval_step(operand: &Expression,
                            delta: i64,
                            prefix: bool,
                            env: &Environment)
                            -> EvalResult<Value> {
        let Expression::Identifier(identifier) = operand else {
            return Err(RuntimeError::InvalidStepTarget { target: operand.to_string() });
        };
        let name = identifier.name.as_str();

        let old = env.get(name)
                     .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })?;

        let overflow =
            || RuntimeError::InvalidStepTarget { target: format!("{name} (integer overflow)") };

        let new = match &old {
            Value::Integer(n) => Value::Integer(n.checked_add(delta).ok_or_else(overflow)?),
            #[allow(clippy::cast_precision_loss)]
            Value::Float(x) => Value::Float(x + delta as f64),
            other => {
                return Err(RuntimeError::InvalidStepTarget { target: format!("{name} ({})",
                                                                             other.type_name()) });
            },
        };

        env.set(name, new.clone());
        Ok(if prefix { new } else { old })
    }
}
