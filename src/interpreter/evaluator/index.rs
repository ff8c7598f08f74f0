use std::collections::BTreeMap;

use crate::{
    ast::{Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::{core::Value, hash_key::HashPair},
    },
    util::num::{clamp_bound, index_within},
};

impl Context {
    /// Evaluates `target[index]`.
    ///
    /// - Arrays take an integer index. Out-of-range indices, including
    ///   negative ones, yield `null`.
    /// - Strings take an integer index and yield a one-character string, or
    ///   `null` when out of range. Indices count characters, not bytes.
    /// - Hashes take any hashable key. A missing key yields `null`.
    ///
    /// # Errors
    /// - `InvalidIndex` for a non-integer index into an array or string.
    /// - `UnusableHashKey` for an unhashable key into a hash.
    /// - `IndexNotSupported` for any other target.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    ///
    /// assert_eq!(Context::eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(2));
    /// assert_eq!(Context::eval_index(&array, &Value::Integer(2)).unwrap(), Value::Null);
    /// assert_eq!(Context::eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
    ///
    /// let word = Value::from("héllo");
    /// assert_eq!(Context::eval_index(&word, &Value::Integer(1)).unwrap(), Value::from("é"));
    /// ```
    pub fn eval_index(target: &Value, index: &Value) -> EvalResult<Value> {
        match (target, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                let elements = elements.borrow();
                Ok(index_within(*i, elements.len()).map_or(Value::Null, |i| elements[i].clone()))
            },
            (Value::Str(s), Value::Integer(i)) => Ok(usize::try_from(*i).ok()
                                                                       .and_then(|i| s.chars().nth(i))
                                                                       .map_or(Value::Null, |c| {
                                                                           Value::from(c.to_string())
                                                                       })),
            (Value::Array(_) | Value::Str(_), index) => {
                Err(RuntimeError::InvalidIndex { target: target.type_name(),
                                                 index:  index.type_name(), })
            },
            (Value::Hash(pairs), key) => {
                let key = key.hash_key()
                             .ok_or(RuntimeError::UnusableHashKey { kind: key.type_name() })?;
                Ok(pairs.borrow()
                        .get(&key)
                        .map_or(Value::Null, |pair| pair.value.clone()))
            },
            (target, _) => Err(RuntimeError::IndexNotSupported { kind: target.type_name() }),
        }
    }

    /// Evaluates `target[start:end]` on an array or string.
    ///
    /// A missing bound defaults to the start or the end. Bounds are clamped
    /// into the valid range, and a start past the end produces an empty
    /// result. The result is always a new value.
    ///
    /// # Errors
    /// - `InvalidIndex` for a bound that is not an integer.
    /// - `IndexNotSupported` for a target that is neither an array nor a
    ///   string.
    pub fn eval_slice(target: &Value,
                      start: Option<&Value>,
                      end: Option<&Value>)
                      -> EvalResult<Value> {
        let len = match target {
            Value::Array(elements) => elements.borrow().len(),
            Value::Str(s) => s.chars().count(),
            _ => return Err(RuntimeError::IndexNotSupported { kind: target.type_name() }),
        };

        let bound = |bound: Option<&Value>, default: usize| match bound {
            None => Ok(default),
            Some(Value::Integer(i)) => Ok(clamp_bound(*i, len)),
            Some(other) => Err(RuntimeError::InvalidIndex { target: target.type_name(),
                                                            index:  other.type_name(), }),
        };
        let start = bound(start, 0)?;
        let end = bound(end, len)?.max(start);

        Ok(match target {
               Value::Array(elements) => Value::from(elements.borrow()[start..end].to_vec()),
               Value::Str(s) => Value::from(s.chars()
                                             .skip(start)
                                             .take(end - start)
                                             .collect::<String>()),
               _ => unreachable!("slice target kind checked above"),
           })
    }

    /// Evaluates `let name[index] = value`, mutating the collection bound to
    /// `name` in place. Every binding sharing that collection sees the
    /// change.
    ///
    /// # Errors
    /// - `IdentifierNotFound` if `name` is unbound.
    /// - `IndexOutOfRange` for an array index outside `0..len`. Arrays never
    ///   grow through index assignment; use `push` instead.
    /// - `InvalidIndex` for a non-integer array index.
    /// - `UnusableHashKey` for an unhashable hash key.
    /// - `IndexAssignmentNotSupported` for any other target.
    pub(crate) fn eval_index_assignment(&self,
                                        name: &Identifier,
                                        index: &Expression,
                                        value: Value,
                                        env: &Environment)
                                        -> EvalResult<()> {
        let target = env.get(&name.name)
                        .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.name
                                                                                    .clone() })?;
        let index = self.eval_expression(index, env)?;

        match (&target, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                let mut elements = elements.borrow_mut();
                let length = elements.len();
                let slot = index_within(i, length).ok_or(RuntimeError::IndexOutOfRange { index:
                                                                                             i,
                                                                                         length })?;
                elements[slot] = value;
                Ok(())
            },
            (Value::Array(_), index) => {
                Err(RuntimeError::InvalidIndex { target: target.type_name(),
                                                 index:  index.type_name(), })
            },
            (Value::Hash(pairs), key) => {
                let hash_key = key.hash_key()
                                  .ok_or(RuntimeError::UnusableHashKey { kind: key.type_name() })?;
                pairs.borrow_mut().insert(hash_key, HashPair { key, value });
                Ok(())
            },
            (target, _) => {
                Err(RuntimeError::IndexAssignmentNotSupported { kind: target.type_name() })
            },
        }
    }

    /// Evaluates a hash literal. Keys and values are evaluated pairwise in
    /// source order; a repeated key keeps the last value.
    ///
    /// # Errors
    /// `UnusableHashKey` if a key is not an integer, float, string or
    /// boolean.
    pub(crate) fn eval_hash_literal(&self,
                                    pairs: &[(Expression, Expression)],
                                    env: &Environment)
                                    -> EvalResult<Value> {
        let mut hash = BTreeMap::new();

        for (key, value) in pairs {
            let key = self.eval_expression(key, env)?;
            let hash_key = key.hash_key()
                              .ok_or(RuntimeError::UnusableHashKey { kind: key.type_name() })?;
            let value = self.eval_expression(value, env)?;

            hash.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::from(hash))
    }
}
