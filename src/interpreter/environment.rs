use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::interpreter::value::core::Value;

/// Where `puts` and `print` send their text.
///
/// An environment chain shares one sink: enclosed environments inherit the
/// sink of their outer environment.
#[derive(Debug, Clone, Default)]
pub enum Output {
    /// Write to the process's standard output.
    #[default]
    Stdout,
    /// Append to an in-memory buffer.
    Captured(Rc<RefCell<String>>),
}

impl Output {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn captured() -> Self {
        Self::Captured(Rc::new(RefCell::new(String::new())))
    }

    /// Writes `text` verbatim.
    ///
    /// # Errors
    /// Returns the I/O error of a failed write to standard output. Captured
    /// writes cannot fail.
    pub fn write(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()
            },
            Self::Captured(buffer) => {
                buffer.borrow_mut().push_str(text);
                Ok(())
            },
        }
    }

    /// Returns everything written to a captured sink so far. Standard output
    /// has no contents to return.
    #[must_use]
    pub fn contents(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Captured(buffer) => buffer.borrow().clone(),
        }
    }
}

struct Scope {
    store:  HashMap<String, Value>,
    outer:  Option<Environment>,
    output: Output,
}

/// A lexical scope: a table of bindings plus an optional enclosing scope.
///
/// `Environment` is a cheap handle; clones refer to the same scope. Closures
/// keep their defining environment alive by holding such a handle, and a
/// function call creates a fresh environment enclosed by it.
///
/// Lookups walk outward through enclosing scopes. Bindings are always
/// created or overwritten in the innermost scope, so a `let` inside a
/// function body shadows an outer name instead of updating it.
///
/// # Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new();
/// global.set("x", Value::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.set("x", Value::Integer(2));
///
/// assert_eq!(local.get("x"), Some(Value::Integer(2)));
/// assert_eq!(global.get("x"), Some(Value::Integer(1)));
/// assert_eq!(local.get("y"), None);
/// ```
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates an empty top-level environment writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Output::Stdout)
    }

    /// Creates an empty top-level environment writing to `output`.
    #[must_use]
    pub fn with_output(output: Output) -> Self {
        Self(Rc::new(RefCell::new(Scope { store: HashMap::new(),
                                          outer: None,
                                          output })))
    }

    /// Creates an empty environment enclosed by `outer`. It shares the
    /// output sink of `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Self) -> Self {
        let output = outer.output();
        Self(Rc::new(RefCell::new(Scope { store: HashMap::new(),
                                          outer: Some(outer.clone()),
                                          output })))
    }

    /// Looks `name` up in this scope, then in each enclosing scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        match scope.store.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref()?.get(name),
        }
    }

    /// Binds `name` in this scope and returns the bound value.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }

    /// Returns `true` if `name` is bound in this scope itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().store.contains_key(name)
    }

    /// Returns the output sink shared by this environment chain.
    #[must_use]
    pub fn output(&self) -> Output {
        self.0.borrow().output.clone()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names = scope.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("enclosed", &scope.outer.is_some())
         .finish()
    }
}
