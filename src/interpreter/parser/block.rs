use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces. The current token must be `{`;
    /// on success it is the matching `}`.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// Fails on the first statement that does not parse, or if the input
    /// ends before the closing brace.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                                -> ParseResult<BlockStatement> {
        let position = self.current.position;
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                return Err(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                         found:    TokenKind::Eof,
                                                         position: self.current.position, });
            }
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(BlockStatement { statements,
                            position })
    }
}
