use tracing::debug;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Handler for tokens that can start an expression.
pub(in crate::interpreter::parser) type PrefixParseFn<'source> =
    fn(&mut Parser<'source>) -> ParseResult<Expression>;

/// Handler for tokens that continue an expression, given the expression
/// parsed so far.
pub(in crate::interpreter::parser) type InfixParseFn<'source> =
    fn(&mut Parser<'source>, Expression) -> ParseResult<Expression>;

/// Name used in diagnostics when the caller does not provide one.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Binding power of operators, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting point of a full expression.
    Lowest,
    /// `and`, `or`
    Logical,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `..`, `...`
    Range,
    /// `+`, `-`
    Sum,
    /// `*`, `/`, `%`
    Product,
    /// `**`
    Power,
    /// Unary `!`, `-`, `~`, `++`, `--`
    Prefix,
    /// `&`, `|`, `^`, `<<`, `>>`, `>>>`
    Bitwise,
    /// Calls and postfix `++`/`--`
    Call,
    /// `[`
    Index,
}

impl Precedence {
    /// Maps a token to the precedence it has in infix position. Tokens that
    /// cannot continue an expression map to [`Precedence::Lowest`].
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{parser::core::Precedence, token::TokenKind};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::And | TokenKind::Or => Self::Logical,
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => Self::LessGreater,
            TokenKind::Range | TokenKind::ExclusiveRange => Self::Range,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Self::Product,
            TokenKind::Power => Self::Power,
            TokenKind::Ampersand
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::ShiftLeft
            | TokenKind::ShiftRight
            | TokenKind::UnsignedShiftRight => Self::Bitwise,
            TokenKind::LParen | TokenKind::Increment | TokenKind::Decrement => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over the token stream of a [`Lexer`].
///
/// The parser keeps two tokens of lookahead (`current` and `peek`). Syntax
/// errors do not abort parsing: each failed statement is recorded and the
/// parser resumes with the following token, so one pass reports as many
/// problems as it can find. Callers must check [`Parser::errors`] before
/// trusting the returned [`Program`].
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("a + b * c"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))");
/// ```
pub struct Parser<'source> {
    lexer:       Lexer<'source>,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek:    Token,
    errors:      Vec<ParseError>,
    source_name: String,
}

impl<'source> Parser<'source> {
    /// Creates a parser reading from `lexer`, reporting errors against
    /// [`DEFAULT_SOURCE_NAME`].
    #[must_use]
    pub fn new(lexer: Lexer<'source>) -> Self {
        Self::with_source_name(lexer, DEFAULT_SOURCE_NAME)
    }

    /// Creates a parser whose error messages are prefixed with `source_name`,
    /// typically a file path.
    #[must_use]
    pub fn with_source_name(mut lexer: Lexer<'source>, source_name: impl Into<String>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer,
               current,
               peek,
               errors: Vec::new(),
               source_name: source_name.into() }
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the program and their
    /// errors are recorded.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current.is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        program
    }

    /// Returns the recorded syntax errors as `source:line:column: message`
    /// strings, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.located(&self.source_name)).collect()
    }

    /// Returns the recorded syntax errors.
    #[must_use]
    pub fn parse_errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn record(&mut self, error: ParseError) {
        debug!(source = %self.source_name, %error, "syntax error");
        self.errors.push(error);
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// This is the Pratt loop: the current token's prefix handler produces the
    /// left operand, then infix handlers extend it for as long as the next
    /// token binds more tightly than `precedence`. Using `<` here (rather
    /// than `<=`) makes every binary operator left-associative.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> ParseResult<Expression> {
        let prefix = Self::prefix_parse_fn(self.current.kind).ok_or_else(|| {
                         ParseError::NoPrefixParseFn { kind:     self.current.kind,
                                                       position: self.current.position, }
                     })?;
        let mut left = prefix(self)?;

        while !self.peek.is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Ok(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// The prefix handler table.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<'source>> {
        let handler: PrefixParseFn<'source> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::Float => Self::parse_float_literal,
            TokenKind::Str => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus | TokenKind::Tilde => Self::parse_prefix_expression,
            TokenKind::Increment | TokenKind::Decrement => Self::parse_prefix_step,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::While => Self::parse_while_expression,
            TokenKind::For => Self::parse_for_expression,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(handler)
    }

    /// The infix handler table.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<'source>> {
        let handler: InfixParseFn<'source> = match kind {
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            TokenKind::Increment | TokenKind::Decrement => Self::parse_postfix_step,
            TokenKind::Range | TokenKind::ExclusiveRange => Self::parse_range_expression,
            _ if super::binary::token_to_infix_operator(kind).is_some() => {
                Self::parse_infix_expression
            },
            _ => return None,
        };
        Some(handler)
    }

    /// Advances both lookahead tokens by one.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the peek token has the given kind, otherwise fails
    /// without consuming anything.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self,
                                                      kind: TokenKind)
                                                      -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(self.unexpected_peek(kind))
        }
    }

    pub(in crate::interpreter::parser) fn unexpected_peek(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken { expected,
                                      found: self.peek.kind,
                                      position: self.peek.position }
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}
