use logos::Logos;

use crate::interpreter::token::{LexerExtras, Position, Token, TokenKind};

/// Turns source text into [`Token`]s, one call to [`Lexer::next_token`] at a
/// time.
///
/// Scanning is delegated to the logos-generated [`TokenKind`] automaton; this
/// wrapper attaches literals and positions, maps unrecognised input to
/// [`TokenKind::Illegal`] and keeps returning [`TokenKind::Eof`] once the
/// input is exhausted.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// ```
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, TokenKind>,
    source:   &'source str,
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line:       1,
                                                                         line_start: 0, }),
               source,
               finished: false }
    }

    /// Returns the next token and advances past it.
    ///
    /// Never fails: characters that start no token come back as `Illegal`
    /// tokens whose literal is the offending text. At the end of input every
    /// call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof();
        }

        let Some(result) = self.inner.next() else {
            self.finished = true;
            return self.eof();
        };

        let span = self.inner.span();
        let position = self.position_of(span.start);
        let slice = self.inner.slice();

        match result {
            Ok(TokenKind::Str) => {
                let token = Token::new(TokenKind::Str, unquote(slice), position);
                if let Some(last) = slice.rfind('\n') {
                    self.inner.extras.line += slice.matches('\n').count();
                    self.inner.extras.line_start = span.start + last + 1;
                }
                token
            },
            Ok(kind) => Token::new(kind, slice, position),
            Err(()) => Token::new(TokenKind::Illegal, slice, position),
        }
    }

    /// Builds the position of `offset`, which must lie on the current line.
    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        let column = self.source[extras.line_start..offset].chars().count() + 1;

        Position::new(offset, extras.line, column)
    }

    fn eof(&self) -> Token {
        Token::new(TokenKind::Eof, "", self.position_of(self.source.len()))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

/// Strips the opening quote and, when present, the matching closing quote.
fn unquote(slice: &str) -> &str {
    let mut chars = slice.chars();
    let Some(quote) = chars.next() else {
        return slice;
    };
    let body = chars.as_str();

    body.strip_suffix(quote).unwrap_or(body)
}
