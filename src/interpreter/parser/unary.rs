use crate::{
    ast::{BlockStatement, Expression, Identifier, PrefixOperator, Statement},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

/// Prefix handlers: everything that can start an expression.
impl Parser<'_> {
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier { name:     self.current.literal.clone(),
                                               position: self.current.position, }))
    }

    /// Parses an integer literal.
    ///
    /// # Errors
    /// `InvalidInteger` if the digits do not fit in an `i64`.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self)
                                                                -> ParseResult<Expression> {
        let position = self.current.position;
        let value = self.current.literal.parse::<i64>().map_err(|_| {
                        ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                     position }
                    })?;

        Ok(Expression::Integer { value, position })
    }

    pub(in crate::interpreter::parser) fn parse_float_literal(&mut self)
                                                              -> ParseResult<Expression> {
        let position = self.current.position;
        let value = self.current.literal.parse::<f64>().map_err(|_| {
                        ParseError::InvalidFloat { literal: self.current.literal.clone(),
                                                   position }
                    })?;

        Ok(Expression::Float { value, position })
    }

    pub(in crate::interpreter::parser) fn parse_string_literal(&mut self)
                                                               -> ParseResult<Expression> {
        Ok(Expression::Str { value:    self.current.literal.clone(),
                             position: self.current.position, })
    }

    pub(in crate::interpreter::parser) fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean { value:    self.current_is(TokenKind::True),
                                 position: self.current.position, })
    }

    /// Parses `!x`, `-x` or `~x`. The operand binds at
    /// [`Precedence::Prefix`], so `-a * b` is `((-a) * b)`.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self)
                                                                  -> ParseResult<Expression> {
        let position = self.current.position;
        let operator = match self.current.kind {
            TokenKind::Bang => PrefixOperator::Bang,
            TokenKind::Minus => PrefixOperator::Minus,
            _ => PrefixOperator::Tilde,
        };
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator,
                                right: Box::new(right),
                                position })
    }

    /// Parses `++x` and `--x`.
    pub(in crate::interpreter::parser) fn parse_prefix_step(&mut self)
                                                            -> ParseResult<Expression> {
        let position = self.current.position;
        let increment = self.current_is(TokenKind::Increment);
        self.next_token();
        let operand = Box::new(self.parse_expression(Precedence::Prefix)?);

        Ok(if increment {
               Expression::Increment { operand,
                                       prefix: true,
                                       position }
           } else {
               Expression::Decrement { operand,
                                       prefix: true,
                                       position }
           })
    }

    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self)
                                                                   -> ParseResult<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    /// Parses an `if` expression with optional `else` and chained `else if`.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { ... }
    ///     else if (<condition>) { ... }
    ///     else { ... }
    /// ```
    /// The parentheses are the ordinary grouping kind, so they may be
    /// omitted. An `else if` chain is stored as an alternative block holding
    /// the nested `if`.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self)
                                                              -> ParseResult<Expression> {
        let position = self.current.position;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();

            if self.peek_is(TokenKind::If) {
                self.next_token();
                let nested_position = self.current.position;
                let nested = self.parse_if_expression()?;
                Some(BlockStatement { statements: vec![Statement::Expression { expression: nested,
                                                                               position:   nested_position, }],
                                      position:   nested_position, })
            } else {
                self.expect_peek(TokenKind::LBrace)?;
                Some(self.parse_block_statement()?)
            }
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative,
                            position })
    }

    /// Parses `fn(<params>) { <body> }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self)
                                                                 -> ParseResult<Expression> {
        let position = self.current.position;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::Function { parameters,
                                  body,
                                  position })
    }

    /// Parses `while (<condition>) { <body> }`.
    pub(in crate::interpreter::parser) fn parse_while_expression(&mut self)
                                                                 -> ParseResult<Expression> {
        let position = self.current.position;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::While { condition: Box::new(condition),
                               body,
                               position })
    }

    /// Parses `for (<init>; <check>; <iterate>) { <body> }`.
    ///
    /// `init` and `iterate` are ordinary statements, normally `let`
    /// bindings, parsed with the statement parser; `check` is an expression.
    ///
    /// # Errors
    /// Returns a `ParseError` if the parentheses, either `;`, the braces or
    /// any clause is malformed.
    pub(in crate::interpreter::parser) fn parse_for_expression(&mut self)
                                                               -> ParseResult<Expression> {
        let position = self.current.position;

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let init = self.parse_statement()?;
        if !self.current_is(TokenKind::Semicolon) {
            return Err(ParseError::UnexpectedToken { expected: TokenKind::Semicolon,
                                                     found:    self.peek.kind,
                                                     position: self.peek.position, });
        }

        self.next_token();
        let check = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        self.next_token();
        let iterate = self.parse_statement()?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::For { init: Box::new(init),
                             check: Box::new(check),
                             iterate: Box::new(iterate),
                             body,
                             position })
    }

    /// Parses `[a, b, c]`.
    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self)
                                                              -> ParseResult<Expression> {
        let position = self.current.position;
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Ok(Expression::Array { elements, position })
    }

    /// Parses `{key: value, ...}`. An empty hash `{}` is accepted, as is a
    /// trailing comma.
    pub(in crate::interpreter::parser) fn parse_hash_literal(&mut self)
                                                             -> ParseResult<Expression> {
        let position = self.current.position;
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }
        self.expect_peek(TokenKind::RBrace)?;

        Ok(Expression::Hash { pairs, position })
    }
}
