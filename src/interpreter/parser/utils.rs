use crate::{
    ast::{Expression, Identifier},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions up to `closing`.
    ///
    /// This is shared by array literals and call argument lists. The current
    /// token is the opening delimiter; on success it is `closing`. An
    /// immediately following `closing` produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)?`
    ///
    /// # Errors
    /// Returns a `ParseError` if an element fails to parse or the list is
    /// not terminated by `closing`.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: TokenKind)
                                                                -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses the parameter names of a function literal. The current token
    /// is `(`; on success it is `)`.
    pub(in crate::interpreter::parser) fn parse_function_parameters(
        &mut self)
        -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        loop {
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier { name:     self.current.literal.clone(),
                                         position: self.current.position, });

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }
}
