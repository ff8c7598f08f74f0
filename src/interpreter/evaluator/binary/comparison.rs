use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an operator on two strings.
    ///
    /// `+` concatenates. `==`, `!=`, `<`, `>`, `<=` and `>=` compare
    /// lexicographically by Unicode scalar values.
    ///
    /// # Errors
    /// `UnknownInfixOperator` for any other operator.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_string_infix(InfixOperator::Add, "Hello", " World!").unwrap();
    /// assert_eq!(joined, Value::from("Hello World!"));
    ///
    /// let less = Context::eval_string_infix(InfixOperator::Less, "abc", "abd").unwrap();
    /// assert_eq!(less, Value::Boolean(true));
    ///
    /// let err = Context::eval_string_infix(InfixOperator::Sub, "a", "b").unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: STRING - STRING");
    /// ```
    pub fn eval_string_infix(operator: InfixOperator, a: &str, b: &str) -> EvalResult<Value> {
        use InfixOperator::{Add, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(match operator {
               Add => Value::from(format!("{a}{b}")),
               Equal => Value::Boolean(a == b),
               NotEqual => Value::Boolean(a != b),
               Less => Value::Boolean(a < b),
               Greater => Value::Boolean(a > b),
               LessEqual => Value::Boolean(a <= b),
               GreaterEqual => Value::Boolean(a >= b),
               _ => return Err(unsupported(operator, &Value::from(a), &Value::from(b))),
           })
    }
}
