use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, Identifier},
    interpreter::{
        environment::Environment,
        evaluator::function::core::Builtin,
        value::hash_key::{HashKey, HashPair},
    },
};

/// Shared, mutable storage of an array value.
pub type ArrayCell = Rc<RefCell<Vec<Value>>>;
/// Shared, mutable storage of a hash value.
pub type HashCell = Rc<RefCell<BTreeMap<HashKey, HashPair>>>;

/// Represents a runtime value in the interpreter.
///
/// Scalars are stored inline. Arrays and hashes are reference values: copies
/// of a binding share the same storage, so an index assignment through one
/// is visible through every other. Functions share their definition and
/// captured environment.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision float.
    Float(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// `true` or `false`.
    Boolean(bool),
    /// The absent value. Produced by `if` without a taken branch, loops,
    /// out-of-range lookups and most builtins that only have side effects.
    Null,
    /// An ordered sequence of values.
    Array(ArrayCell),
    /// A mapping from hashable values to values.
    Hash(HashCell),
    /// A user function together with the environment it closed over.
    Function(Rc<Function>),
    /// A function provided by the interpreter.
    Builtin(&'static Builtin),
    /// A runtime error message. Terminates the program that produced it.
    Error(String),
    /// Wraps the value of a `return` while it unwinds enclosing blocks.
    Return(Box<Self>),
}

/// A function literal bound to the environment it was evaluated in.
pub struct Function {
    /// Parameter names, bound positionally on each call.
    pub parameters: Vec<Identifier>,
    /// The body evaluated on each call.
    pub body:       BlockStatement,
    /// The defining environment.
    pub env:        Environment,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .finish_non_exhaustive()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<BTreeMap<HashKey, HashPair>> for Value {
    fn from(v: BTreeMap<HashKey, HashPair>) -> Self {
        Self::Hash(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Returns the upper-case kind name used in error messages and by the
    /// `type` builtin.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::from("a").type_name(), "STRING");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Str(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Error(_) => "ERROR",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Only `false` and `null` are falsy. Zero, empty strings and empty
    /// collections are truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Returns `true` for runtime error values.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Derives the hash key of this value, if it is hashable.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        HashKey::of(self)
    }

    /// Renders the value the way the REPL echoes it. Same as `to_string()`.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Equality as seen by the `==` operator on two operands of the same
    /// kind.
    ///
    /// Scalars compare by value. Arrays, hashes and functions compare by
    /// identity: two literals with the same contents are different values,
    /// while two bindings of one value are equal.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// let a = Value::from(vec![Value::Integer(1)]);
    /// let b = Value::from(vec![Value::Integer(1)]);
    ///
    /// assert!(a.same_as(&a.clone()));
    /// assert!(!a.same_as(&b));
    /// assert!(Value::from("x").same_as(&Value::from("x")));
    /// ```
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality, used by tests and by `contains`. Unlike
/// [`Value::same_as`], arrays and hashes compare by contents.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => self.same_as(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, pair) in pairs.borrow().values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{\n{}\n}}", function.body)
            },
            Self::Builtin(_) => f.write_str("builtin function"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
