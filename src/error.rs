/// Parsing errors.
///
/// Defines the syntax errors recorded by the parser and the `SyntaxErrors`
/// list handed back to callers when an input does not parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures the evaluator can run into, such as type
/// mismatches, unknown operators, unbound identifiers or division by zero.
/// They surface to scripts as error values.
pub mod runtime_error;

pub use parse_error::{ParseError, SyntaxErrors};
pub use runtime_error::RuntimeError;
