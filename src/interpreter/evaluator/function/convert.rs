use crate::{
    interpreter::{
        environment::Environment,
        evaluator::utils::unsupported_argument,
        value::core::Value,
    },
    util::num::{f64_to_i64, i64_to_f64},
};

/// Returns the kind name of the argument as a string, such as `"INTEGER"`.
pub fn type_of(_env: &Environment, args: &[Value]) -> Value {
    Value::from(args[0].type_name())
}

/// Returns the inspect form of the argument as a string.
pub fn string(_env: &Environment, args: &[Value]) -> Value {
    Value::from(args[0].inspect())
}

/// Converts to an integer.
///
/// - Integers are returned unchanged.
/// - Floats are truncated towards zero.
/// - Strings are parsed as a decimal integer, surrounding whitespace
///   allowed.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment, evaluator::function::convert::int, value::core::Value,
/// };
///
/// let env = Environment::new();
///
/// assert_eq!(int(&env, &[Value::Float(-2.7)]), Value::Integer(-2));
/// assert_eq!(int(&env, &[Value::from(" 17 ")]), Value::Integer(17));
/// assert!(int(&env, &[Value::from("seven")]).is_error());
/// ```
pub fn int(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Integer(n) => Value::Integer(*n),
        Value::Float(x) => match f64_to_i64(*x) {
            Some(n) => Value::Integer(n),
            None => Value::Error(format!("could not convert {x} to INTEGER")),
        },
        Value::Str(s) => match s.trim().parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Error(format!("could not parse {s:?} as INTEGER")),
        },
        other => unsupported_argument("int", other),
    }
}

/// Converts to a float. Integers are widened and strings are parsed.
pub fn float(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Integer(n) => Value::Float(i64_to_f64(*n)),
        Value::Float(x) => Value::Float(*x),
        Value::Str(s) => match s.trim().parse::<f64>() {
            Ok(x) => Value::Float(x),
            Err(_) => Value::Error(format!("could not parse {s:?} as FLOAT")),
        },
        other => unsupported_argument("float", other),
    }
}
