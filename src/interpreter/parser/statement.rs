use crate::{
    ast::{Identifier, LetStatement, Statement},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a `let` binding or index assignment,
    /// - a `return` statement,
    /// - a comment,
    /// - an expression used as a statement.
    ///
    /// On success the current token is the last token of the statement
    /// (its `;` when one was written).
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => Ok(Statement::Let(self.parse_let_statement()?)),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Comment => Ok(Statement::Comment { text:     self.current.literal.clone(),
                                                          position: self.current.position, }),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>` or
    /// `let <identifier>[<expression>] = <expression>`, with an optional
    /// trailing `;`.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the name is missing,
    /// - the index target is not closed with `]`,
    /// - `=` is missing,
    /// - the value fails to parse.
    pub(in crate::interpreter::parser) fn parse_let_statement(&mut self)
                                                              -> ParseResult<LetStatement> {
        let position = self.current.position;

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier { name:     self.current.literal.clone(),
                                position: self.current.position, };

        let index = if self.peek_is(TokenKind::LBracket) {
            self.next_token();
            self.next_token();
            let index = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::RBracket)?;
            Some(Box::new(index))
        } else {
            None
        };

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(LetStatement { name,
                          index,
                          value,
                          position })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let position = self.current.position;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Return { value, position })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let position = self.current.position;
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression { expression,
                                   position })
    }
}
