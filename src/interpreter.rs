/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment, applies operators
/// and functions, and produces values. Runtime failures propagate as
/// `RuntimeError`s internally and surface to programs as error values.
///
/// # Responsibilities
/// - Evaluates every statement and expression form of the language.
/// - Creates closures and applies user and builtin functions.
/// - Reports runtime errors such as type mismatches or unbound names.
pub mod evaluator;
/// Lexical scopes and the output sink.
///
/// An `Environment` maps names to values and may be enclosed by an outer
/// environment. Closures capture the environment they were created in.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each with its kind, literal text and source position. Unrecognized
/// input becomes an `Illegal` token instead of an error.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: each token kind maps to prefix and infix handlers, and
/// binding power comes from a precedence table. Errors are collected rather
/// than aborting the parse.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records syntax errors with their source positions.
/// - Resynchronizes after an error so later statements are still parsed.
pub mod parser;
/// Token kinds, tokens and source positions.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum, its text rendering, truthiness
/// and equality, and the hash keys used by hash values.
pub mod value;
