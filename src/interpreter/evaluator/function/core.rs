use std::{fmt, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{BlockStatement, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, convert, print, text},
        },
        value::core::{Function, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the caller's environment, for access to its output
/// sink, and the evaluated arguments. Misuse is reported by returning a
/// [`Value::Error`], never by panicking.
pub type BuiltinFn = fn(&Environment, &[Value]) -> Value;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means it accepts `n` or more.
/// - `OneOf(slice)` means it accepts any count listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
    /// Any of the listed counts.
    OneOf(&'static [usize]),
}

/// A native function callable from scripts.
#[derive(Debug)]
pub struct Builtin {
    /// The name scripts refer to it by.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every builtin known to a default [`Context`].
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin in [`BUILTIN_TABLE`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"      => { arity: Arity::Exact(1), func: builtin::len },
    "first"    => { arity: Arity::Exact(1), func: builtin::first },
    "last"     => { arity: Arity::Exact(1), func: builtin::last },
    "rest"     => { arity: Arity::Exact(1), func: builtin::rest },
    "push"     => { arity: Arity::Exact(2), func: builtin::push },
    "keys"     => { arity: Arity::Exact(1), func: builtin::keys },
    "values"   => { arity: Arity::Exact(1), func: builtin::values },
    "delete"   => { arity: Arity::Exact(2), func: builtin::delete },
    "contains" => { arity: Arity::Exact(2), func: builtin::contains },
    "puts"     => { arity: Arity::AtLeast(0), func: print::puts },
    "print"    => { arity: Arity::AtLeast(0), func: print::print },
    "type"     => { arity: Arity::Exact(1), func: convert::type_of },
    "string"   => { arity: Arity::Exact(1), func: convert::string },
    "int"      => { arity: Arity::Exact(1), func: convert::int },
    "float"    => { arity: Arity::Exact(1), func: convert::float },
    "join"     => { arity: Arity::OneOf(&[1, 2]), func: text::join },
    "split"    => { arity: Arity::OneOf(&[1, 2]), func: text::split },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::OneOf(counts) => counts.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::OneOf(counts) => {
                for (i, n) in counts.iter().enumerate() {
                    match i {
                        0 => write!(f, "{n}")?,
                        _ if i + 1 == counts.len() => write!(f, " or {n}")?,
                        _ => write!(f, ", {n}")?,
                    }
                }
                Ok(())
            },
        }
    }
}

impl Builtin {
    /// Checks the argument count, then runs the builtin.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{
    ///     environment::Environment, evaluator::function::core::BUILTIN_TABLE, value::core::Value,
    /// };
    ///
    /// let len = BUILTIN_TABLE.iter().find(|b| b.name == "len").unwrap();
    /// let env = Environment::new();
    ///
    /// assert_eq!(len.call(&env, &[Value::from("four")]), Value::Integer(4));
    /// assert_eq!(len.call(&env, &[]).to_string(),
    ///            "ERROR: wrong number of arguments to len: got=0, want=1");
    /// ```
    #[must_use]
    pub fn call(&self, env: &Environment, args: &[Value]) -> Value {
        if !self.arity.check(args.len()) {
            return Value::Error(format!("wrong number of arguments to {}: got={}, want={}",
                                        self.name,
                                        args.len(),
                                        self.arity));
        }

        (self.func)(env, args)
    }
}

impl Context {
    /// Builds a closure value over the current environment.
    pub(crate) fn make_function(parameters: &[Identifier],
                                body: &BlockStatement,
                                env: &Environment)
                                -> Value {
        Value::Function(Rc::new(Function { parameters: parameters.to_vec(),
                                           body:       body.clone(),
                                           env:        env.clone(), }))
    }

    /// Applies a callee to already evaluated arguments.
    ///
    /// A user function runs its body in a fresh environment enclosed by the
    /// environment it captured, with each parameter bound to the argument in
    /// the same position. Surplus arguments are ignored and parameters
    /// without an argument stay unbound. A `return` inside the body ends the
    /// call with its value, and a body that yields nothing produces `null`.
    ///
    /// A builtin is called with the caller's environment. An error value it
    /// returns becomes a runtime error.
    ///
    /// # Errors
    /// - `NotAFunction` if the callee is neither a function nor a builtin.
    /// - Any error raised by the body or the builtin.
    pub fn apply_function(&self,
                          callee: &Value,
                          args: &[Value],
                          env: &Environment)
                          -> EvalResult<Value> {
        trace!(callee = callee.type_name(), arguments = args.len(), "apply");

        match callee {
            Value::Function(function) => {
                if args.len() < function.parameters.len() {
                    debug!(expected = function.parameters.len(),
                           got = args.len(),
                           "function called with fewer arguments than parameters");
                }

                let scope = Environment::new_enclosed(&function.env);
                for (parameter, arg) in function.parameters.iter().zip(args) {
                    scope.set(parameter.name.as_str(), arg.clone());
                }

                Ok(match self.eval_block(&function.body, &scope)? {
                       Some(Value::Return(value)) => *value,
                       Some(value) => value,
                       None => Value::Null,
                   })
            },
            Value::Builtin(builtin) => match builtin.call(env, args) {
                Value::Error(message) => Err(RuntimeError::Builtin(message)),
                value => Ok(value),
            },
            other => Err(RuntimeError::NotAFunction { kind: other.type_name() }),
        }
    }
}
