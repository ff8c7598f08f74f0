/// The parser state and the Pratt loop.
///
/// Defines [`core::Parser`], the precedence table, the prefix/infix handler
/// tables and the token-advancing helpers shared by every grammar rule.
pub mod core;

/// Statement parsing.
///
/// Handles `let` bindings (including index assignment), `return`, comments
/// and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if`, function,
/// `while` and `for` bodies.
pub mod block;

/// Prefix handlers.
///
/// Parses every construct that can start an expression: literals,
/// identifiers, unary operators, grouping, `if`, function literals, loops,
/// array and hash literals.
pub mod unary;

/// Infix handlers.
///
/// Parses binary operators, calls, index and slice expressions, postfix
/// increments and ranges, and maps operator tokens to AST operators.
pub mod binary;

/// Shared list parsers for arguments, elements and parameters.
pub mod utils;
