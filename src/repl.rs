use rustyline::{DefaultEditor, config::Configurer, error::ReadlineError};
use tracing::{debug, warn};

use crate::{
    evaluate, exit_code_of,
    interpreter::{environment::Environment, lexer::Lexer, token::TokenKind, value::core::Value},
};

/// Prompt shown for a fresh input.
pub const PROMPT: &str = ">> ";
/// Prompt shown while an input's brackets are still open.
pub const CONTINUATION_PROMPT: &str = ".. ";
/// Number of inputs kept in the in-memory history.
pub const HISTORY_SIZE: usize = 1000;

/// What a [`Session`] produced for a line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The input is incomplete; more lines are needed.
    Continue,
    /// The input was evaluated and yielded nothing to show.
    Silent,
    /// The input was evaluated; the text to echo.
    Value(String),
    /// The input did not parse; the errors to show.
    Errors(Vec<String>),
}

/// A REPL session: one persistent environment plus the lines of an input
/// that is not complete yet.
///
/// The session is independent of the terminal so it can be driven by tests
/// as well as by [`run`].
///
/// # Example
/// ```
/// use monkey::{
///     interpreter::environment::Environment,
///     repl::{Reply, Session},
/// };
///
/// let mut session = Session::new(Environment::new());
///
/// assert_eq!(session.feed("let add = fn(a, b) {"), Reply::Continue);
/// assert_eq!(session.feed("  a + b"), Reply::Continue);
/// assert_eq!(session.feed("};"), Reply::Silent);
/// assert_eq!(session.feed("add(40, 2)"), Reply::Value("42".to_string()));
/// assert_eq!(session.exit_code(), 42);
/// ```
pub struct Session {
    env:     Environment,
    pending: String,
    last:    Option<Value>,
}

impl Session {
    /// Starts a session that evaluates against `env`.
    #[must_use]
    pub fn new(env: Environment) -> Self {
        Self { env,
               pending: String::new(),
               last: None }
    }

    /// The prompt to show before reading the next line.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        if self.pending.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        }
    }

    /// Adds a line to the pending input and evaluates it once its brackets
    /// balance.
    pub fn feed(&mut self, line: &str) -> Reply {
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(line);

        if open_brackets(&self.pending) > 0 {
            return Reply::Continue;
        }

        let source = std::mem::take(&mut self.pending);
        if source.trim().is_empty() {
            return Reply::Silent;
        }

        match evaluate(&source, &self.env) {
            Ok(Some(value)) => {
                let text = value.inspect();
                self.last = Some(value);
                Reply::Value(text)
            },
            Ok(None) => {
                self.last = None;
                Reply::Silent
            },
            Err(errors) => Reply::Errors(errors.0),
        }
    }

    /// Drops the pending input, as Ctrl-C does.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// The exit code for ending the session now: the last value if it was
    /// an integer, else 0.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        exit_code_of(self.last.as_ref())
    }
}

/// Counts brackets that are opened but not yet closed in `source`.
///
/// Brackets are counted on lexer tokens, so brackets inside strings and
/// comments do not count. A negative result means there are more closing
/// brackets than opening ones; such input is complete and will fail to
/// parse.
///
/// # Example
/// ```
/// use monkey::repl::open_brackets;
///
/// assert_eq!(open_brackets("if (x) { [1, 2"), 2);
/// assert_eq!(open_brackets("\"{\" # {"), 0);
/// ```
#[must_use]
pub fn open_brackets(source: &str) -> i64 {
    Lexer::new(source).map(|token| match token.kind {
                          TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => 1,
                          TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => -1,
                          _ => 0,
                      })
                      .sum()
}

/// Runs an interactive session on the terminal until end of input.
///
/// Ctrl-C drops the pending input, Ctrl-D ends the session.
///
/// # Returns
/// The exit code of the session, see [`Session::exit_code`].
///
/// # Errors
/// Returns the terminal error if the line editor fails.
pub fn run(env: Environment) -> rustyline::Result<i32> {
    let mut editor = DefaultEditor::new()?;
    if let Err(error) = editor.set_max_history_size(HISTORY_SIZE) {
        warn!(%error, "could not size the history");
    }

    let mut session = Session::new(env);
    debug!("session started");

    loop {
        match editor.readline(session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty()
                   && let Err(error) = editor.add_history_entry(line.as_str())
                {
                    warn!(%error, "could not add history entry");
                }

                match session.feed(&line) {
                    Reply::Continue | Reply::Silent => {},
                    Reply::Value(text) => println!("{text}"),
                    Reply::Errors(errors) => {
                        for error in errors {
                            eprintln!("\t{error}");
                        }
                    },
                }
            },
            Err(ReadlineError::Interrupted) => session.clear(),
            Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error),
        }
    }

    debug!(exit_code = session.exit_code(), "session ended");
    Ok(session.exit_code())
}
