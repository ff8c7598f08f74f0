use crate::interpreter::token::{Position, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// A specific token was required next but something else was found.
    UnexpectedToken {
        /// The token kind that was required.
        expected: TokenKind,
        /// The token kind that was found instead.
        found:    TokenKind,
        /// Where the offending token starts.
        position: Position,
    },
    /// No expression can start with this token.
    NoPrefixParseFn {
        /// The token kind that started the expression.
        kind:     TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// An integer literal did not fit in 64 bits.
    InvalidInteger {
        /// The literal text.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// A float literal could not be parsed.
    InvalidFloat {
        /// The literal text.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl ParseError {
    /// Gets the source position of the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::NoPrefixParseFn { position, .. }
            | Self::InvalidInteger { position, .. }
            | Self::InvalidFloat { position, .. } => *position,
        }
    }

    /// Renders the error prefixed with `source:line:column`.
    ///
    /// ## Example
    /// ```
    /// use monkey::{
    ///     error::ParseError,
    ///     interpreter::token::{Position, TokenKind},
    /// };
    ///
    /// let error = ParseError::NoPrefixParseFn { kind:     TokenKind::Illegal,
    ///                                           position: Position::new(0, 1, 1), };
    ///
    /// assert_eq!(error.located("repl"),
    ///            "repl:1:1: no prefix parse function for ILLEGAL found");
    /// ```
    #[must_use]
    pub fn located(&self, source_name: &str) -> String {
        format!("{source_name}:{}: {self}", self.position())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { kind, .. } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidInteger { literal, .. } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::InvalidFloat { literal, .. } => write!(f, "could not parse {literal:?} as float"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The syntax errors of one input, already rendered with their locations.
///
/// Returned by [`crate::evaluate`] when parsing fails; a program that
/// produced syntax errors is never evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrors(pub Vec<String>);

impl SyntaxErrors {
    /// The individual messages.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for SyntaxErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, message) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxErrors {}
