/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic, comparisons, bitwise and logical operators, string and array
/// concatenation, and ranges.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators `!`, `-` and `~` and the increment and
/// decrement steps `++` and `--`.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the dispatch over statements and
/// expressions, and the conversion of runtime errors into error values.
pub mod core;

/// Index, slice and index-assignment evaluation, plus hash literals.
pub mod index;

/// Evaluation of `while` and `for` loops.
pub mod loops;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the builtin implementations.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and builtin function calls, builtin arity checking,
/// and the builtin functions themselves.
pub mod function;
