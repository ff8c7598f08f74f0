use crate::interpreter::{
    environment::Environment,
    evaluator::utils::{expected_argument, unsupported_argument},
    value::core::Value,
};

/// Joins the inspect forms of an array's elements with a separator, which
/// defaults to the empty string.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment, evaluator::function::text::join, value::core::Value,
/// };
///
/// let env = Environment::new();
/// let words = Value::from(vec![Value::from("a"), Value::Integer(1), Value::Boolean(true)]);
///
/// assert_eq!(join(&env, &[words.clone(), Value::from("-")]), Value::from("a-1-true"));
/// assert_eq!(join(&env, &[words]), Value::from("a1true"));
/// ```
pub fn join(_env: &Environment, args: &[Value]) -> Value {
    let Value::Array(elements) = &args[0] else {
        return unsupported_argument("join", &args[0]);
    };
    let separator = match args.get(1) {
        None => "",
        Some(Value::Str(separator)) => &**separator,
        Some(other) => return expected_argument("join", 2, "STRING", other),
    };

    Value::from(elements.borrow()
                        .iter()
                        .map(Value::inspect)
                        .collect::<Vec<_>>()
                        .join(separator))
}

/// Splits a string into an array of strings.
///
/// With a separator the string is split on every occurrence of it. Without
/// one, or with an empty separator, it is split on runs of whitespace.
pub fn split(_env: &Environment, args: &[Value]) -> Value {
    let Value::Str(s) = &args[0] else {
        return unsupported_argument("split", &args[0]);
    };

    let parts: Vec<Value> = match args.get(1) {
        Some(Value::Str(separator)) if !separator.is_empty() => {
            s.split(&**separator).map(Value::from).collect()
        },
        None | Some(Value::Str(_)) => s.split_whitespace().map(Value::from).collect(),
        Some(other) => return expected_argument("split", 2, "STRING", other),
    };

    Value::from(parts)
}
