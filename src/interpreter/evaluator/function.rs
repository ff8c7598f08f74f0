/// The builtin registry and function application.
///
/// Declares `BUILTIN_TABLE` through the `builtin_functions!` macro, checks
/// builtin arity and applies user functions in their captured environment.
pub mod core;

/// Collection builtins: `len`, `first`, `last`, `rest`, `push`, `keys`,
/// `values`, `delete` and `contains`.
pub mod builtin;

/// Conversion builtins: `type`, `string`, `int` and `float`.
pub mod convert;

/// Output builtins: `puts` and `print`.
///
/// Both write to the output sink of the calling environment.
pub mod print;

/// String builtins: `join` and `split`.
pub mod text;
