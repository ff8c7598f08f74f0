//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey scripting language,
//! written in Rust. It lexes, parses and evaluates programs with integers,
//! floats, strings, arrays, hashes, first-class functions and closures.
//!
//! The pipeline is `Lexer` → `Parser` → `Context::eval`, driven against an
//! `Environment` that holds the bindings of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use tracing::debug;

use crate::{
    ast::Program,
    error::SyntaxErrors,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        lexer::Lexer,
        parser::core::{DEFAULT_SOURCE_NAME, Parser},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types
/// that represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator. Every node renders back to a canonical,
/// fully parenthesized source form.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the syntax errors recorded by the parser and the
/// runtime errors raised by the evaluator, each with the exact message text
/// shown to users.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokens, lexing, parsing, environments, values
/// and evaluation to provide a complete runtime for Monkey programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Collects lines until their brackets balance, evaluates each complete
/// input against one persistent environment and echoes the result.
pub mod repl;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses `source`, reporting errors against `source_name`.
fn parse(source: &str, source_name: &str) -> Result<Program, SyntaxErrors> {
    let mut parser = Parser::with_source_name(Lexer::new(source), source_name);
    let program = parser.parse_program();

    let errors = parser.errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        debug!(count = errors.len(), source = source_name, "input did not parse");
        Err(SyntaxErrors(errors))
    }
}

/// Lexes, parses and evaluates one input against `env`.
///
/// Bindings made by the input stay in `env`, so successive calls behave
/// like successive lines of a session. Nothing is evaluated if the input
/// has syntax errors.
///
/// # Returns
/// - `Ok(Some(value))`: the value of the last statement. Runtime errors
///   are returned as `Value::Error`.
/// - `Ok(None)`: the last statement yields nothing, such as a `let`.
/// - `Err(SyntaxErrors)`: the input did not parse.
///
/// # Examples
/// ```
/// use monkey::{evaluate, interpreter::{environment::Environment, value::core::Value}};
///
/// let env = Environment::new();
///
/// assert_eq!(evaluate("let add = fn(a, b) { a + b };", &env).unwrap(), None);
/// assert_eq!(evaluate("add(2, 3)", &env).unwrap(), Some(Value::Integer(5)));
///
/// let err = evaluate("let = 5", &env).unwrap_err();
/// assert!(err.to_string().contains("expected next token to be IDENT"));
/// ```
pub fn evaluate(source: &str, env: &Environment) -> Result<Option<Value>, SyntaxErrors> {
    let program = parse(source, DEFAULT_SOURCE_NAME)?;
    Ok(Context::new().eval(&program, env))
}

/// The result of running a whole source file or `-e` string.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The value of the last statement, if any.
    pub value:     Option<Value>,
    /// Syntax errors, each as `source:line:column: message`. Empty when the
    /// input parsed.
    pub errors:    Vec<String>,
    /// The process exit code this run asks for.
    pub exit_code: i32,
}

/// Runs a complete program, the way the binary runs a file.
///
/// - Syntax errors are written to standard error, nothing is evaluated and
///   the exit code is 1.
/// - A runtime error is written to standard error as `ERROR: message`.
/// - Otherwise, when `echo` is set, a final value other than `null` is
///   written to the environment's output sink.
///
/// The exit code of an evaluated program is given by [`exit_code_of`].
///
/// # Examples
/// ```
/// use monkey::{
///     interpreter::environment::{Environment, Output},
///     run_source,
/// };
///
/// let output = Output::captured();
/// let env = Environment::with_output(output.clone());
///
/// let outcome = run_source("puts(\"hi\"); 6 * 7", "demo.mk", &env, true);
///
/// assert_eq!(outcome.exit_code, 42);
/// assert_eq!(output.contents(), "hi\n42\n");
/// ```
pub fn run_source(source: &str, source_name: &str, env: &Environment, echo: bool) -> Outcome {
    let program = match parse(source, source_name) {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("{errors}");
            return Outcome { value:     None,
                             errors:    errors.0,
                             exit_code: 1, };
        },
    };

    let value = Context::new().eval(&program, env);

    match &value {
        Some(error @ Value::Error(_)) => eprintln!("{error}"),
        Some(Value::Null) | None => {},
        Some(value) if echo => {
            if let Err(error) = env.output().write(&format!("{value}\n")) {
                eprintln!("could not write output: {error}");
            }
        },
        Some(_) => {},
    }

    Outcome { exit_code: exit_code_of(value.as_ref()),
              value,
              errors: Vec::new() }
}

/// Maps the last value of a run to a process exit code.
///
/// An integer result becomes the exit code, reduced to its low eight bits
/// the way POSIX shells see it. Anything else exits with 0.
///
/// # Examples
/// ```
/// use monkey::{exit_code_of, interpreter::value::core::Value};
///
/// assert_eq!(exit_code_of(Some(&Value::Integer(3))), 3);
/// assert_eq!(exit_code_of(Some(&Value::Integer(256 + 7))), 7);
/// assert_eq!(exit_code_of(Some(&Value::Integer(-1))), 255);
/// assert_eq!(exit_code_of(Some(&Value::from("3"))), 0);
/// assert_eq!(exit_code_of(None), 0);
/// ```
#[must_use]
pub fn exit_code_of(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Integer(n)) => i32::try_from(n.rem_euclid(256)).unwrap_or_default(),
        _ => 0,
    }
}
