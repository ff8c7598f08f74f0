use std::hash::{DefaultHasher, Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Value;

/// The kinds of value that may be used as hash keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyKind {
    /// An integer key.
    Integer,
    /// A float key.
    Float,
    /// A string key.
    Str,
    /// A boolean key.
    Boolean,
}

/// A kind-aware digest of a hashable [`Value`], used to index hashes.
///
/// Values of the same kind and content always produce the same key. The
/// kind is part of the key, so `1`, `1.0`, `"1"` and `true` never collide
/// even where their discriminants coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    /// The kind of the original value.
    pub kind:         KeyKind,
    /// A digest of the value's content.
    pub discriminant: u64,
}

/// An entry of a hash value: the original key next to the stored value, so
/// that keys can be listed and printed.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written by the program.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl HashKey {
    /// Derives the key of `value`, or `None` if the value is not hashable.
    ///
    /// - Integers use their two's-complement bits.
    /// - Booleans use `0` and `1`.
    /// - Strings use a SipHash of their content.
    /// - Floats hash through `OrderedFloat`, so `0.0` and `-0.0` agree.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// let a = HashKey::of(&Value::from("name"));
    /// let b = HashKey::of(&Value::from("name"));
    /// assert_eq!(a, b);
    ///
    /// assert_ne!(HashKey::of(&Value::Integer(1)), HashKey::of(&Value::Boolean(true)));
    /// assert_eq!(HashKey::of(&Value::Null), None);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        let (kind, discriminant) = match value {
            Value::Integer(n) => (KeyKind::Integer, u64::from_ne_bytes(n.to_ne_bytes())),
            Value::Boolean(b) => (KeyKind::Boolean, u64::from(*b)),
            Value::Str(s) => (KeyKind::Str, digest(s)),
            Value::Float(f) => (KeyKind::Float, digest(&OrderedFloat(*f))),
            _ => return None,
        };

        Some(Self { kind,
                    discriminant })
    }
}

fn digest<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
