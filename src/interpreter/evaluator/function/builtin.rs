use crate::{
    interpreter::{
        environment::Environment,
        evaluator::utils::unsupported_argument,
        value::core::Value,
    },
    util::num::usize_to_i64,
};

/// Returns the length of a string (in characters), array or hash.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment, evaluator::function::builtin::len, value::core::Value,
/// };
///
/// let env = Environment::new();
/// assert_eq!(len(&env, &[Value::from("héllo")]), Value::Integer(5));
/// assert!(len(&env, &[Value::Integer(1)]).is_error());
/// ```
pub fn len(_env: &Environment, args: &[Value]) -> Value {
    let length = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::Array(elements) => elements.borrow().len(),
        Value::Hash(pairs) => pairs.borrow().len(),
        other => return unsupported_argument("len", other),
    };

    Value::Integer(usize_to_i64(length))
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Array(elements) => elements.borrow().first().cloned().unwrap_or(Value::Null),
        other => unsupported_argument("first", other),
    }
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Array(elements) => elements.borrow().last().cloned().unwrap_or(Value::Null),
        other => unsupported_argument("last", other),
    }
}

/// Returns a new array holding every element but the first, or `null` if
/// the array is empty.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment, evaluator::function::builtin::rest, value::core::Value,
/// };
///
/// let env = Environment::new();
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
///
/// assert_eq!(rest(&env, &[array]).to_string(), "[2, 3]");
/// assert_eq!(rest(&env, &[Value::from(vec![])]), Value::Null);
/// ```
pub fn rest(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Array(elements) => match elements.borrow().split_first() {
            Some((_, tail)) => Value::from(tail.to_vec()),
            None => Value::Null,
        },
        other => unsupported_argument("rest", other),
    }
}

/// Returns a new array with the second argument appended. The original
/// array is left untouched.
pub fn push(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Array(elements) => {
            let mut elements = elements.borrow().clone();
            elements.push(args[1].clone());
            Value::from(elements)
        },
        other => unsupported_argument("push", other),
    }
}

/// Returns the keys of a hash as an array.
///
/// Hashes are unordered; the order of the result is stable for a given
/// hash but otherwise unspecified.
pub fn keys(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Hash(pairs) => Value::from(pairs.borrow()
                                               .values()
                                               .map(|pair| pair.key.clone())
                                               .collect::<Vec<_>>()),
        other => unsupported_argument("keys", other),
    }
}

/// Returns the values of a hash as an array, in the same order as `keys`.
pub fn values(_env: &Environment, args: &[Value]) -> Value {
    match &args[0] {
        Value::Hash(pairs) => Value::from(pairs.borrow()
                                               .values()
                                               .map(|pair| pair.value.clone())
                                               .collect::<Vec<_>>()),
        other => unsupported_argument("values", other),
    }
}

/// Removes a key from a hash in place and returns the hash. Removing a
/// missing key is not an error.
pub fn delete(_env: &Environment, args: &[Value]) -> Value {
    let Value::Hash(pairs) = &args[0] else {
        return unsupported_argument("delete", &args[0]);
    };
    let Some(key) = args[1].hash_key() else {
        return Value::Error(format!("unusable as hash key: {}", args[1].type_name()));
    };

    pairs.borrow_mut().remove(&key);
    args[0].clone()
}

/// Tests for a substring, an array element or a hash key.
///
/// Array membership compares elements structurally, so `[1, [2]]` contains
/// `[2]`.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment, evaluator::function::builtin::contains, value::core::Value,
/// };
///
/// let env = Environment::new();
/// let found = contains(&env, &[Value::from("monkey"), Value::from("key")]);
///
/// assert_eq!(found, Value::Boolean(true));
/// ```
pub fn contains(_env: &Environment, args: &[Value]) -> Value {
    match (&args[0], &args[1]) {
        (Value::Str(haystack), Value::Str(needle)) => {
            Value::Boolean(haystack.contains(&**needle))
        },
        (Value::Str(_), other) => unsupported_argument("contains", other),
        (Value::Array(elements), needle) => Value::Boolean(elements.borrow().contains(needle)),
        (Value::Hash(pairs), key) => match key.hash_key() {
            Some(key) => Value::Boolean(pairs.borrow().contains_key(&key)),
            None => Value::Error(format!("unusable as hash key: {}", key.type_name())),
        },
        (other, _) => unsupported_argument("contains", other),
    }
}
