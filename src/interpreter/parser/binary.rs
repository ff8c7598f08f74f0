use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(InfixOperator)` for arithmetic, comparison, bitwise and
/// logical operator tokens and `None` for everything else, including the
/// call, index, postfix and range tokens, which have handlers of their own.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{parser::binary::token_to_infix_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Percent => Some(InfixOperator::Mod),
        TokenKind::Power => Some(InfixOperator::Pow),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::LtEq => Some(InfixOperator::LessEqual),
        TokenKind::GtEq => Some(InfixOperator::GreaterEqual),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        TokenKind::Ampersand => Some(InfixOperator::BitAnd),
        TokenKind::Pipe => Some(InfixOperator::BitOr),
        TokenKind::Caret => Some(InfixOperator::BitXor),
        TokenKind::ShiftLeft => Some(InfixOperator::ShiftLeft),
        TokenKind::ShiftRight => Some(InfixOperator::ShiftRight),
        TokenKind::UnsignedShiftRight => Some(InfixOperator::UnsignedShiftRight),
        TokenKind::And => Some(InfixOperator::And),
        TokenKind::Or => Some(InfixOperator::Or),
        _ => None,
    }
}

/// Infix handlers. Each is entered with the operator token as the current
/// token and the already parsed left operand.
impl Parser<'_> {
    /// Parses the right operand of a binary operator at the operator's own
    /// precedence, which makes the operator left-associative.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expression)
                                                                 -> ParseResult<Expression> {
        let position = self.current.position;
        let Some(operator) = token_to_infix_operator(self.current.kind) else {
            unreachable!("infix handler registered for a non-operator token")
        };
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right),
                               position })
    }

    /// Parses the argument list of `callee(...)`.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expression)
                                                                -> ParseResult<Expression> {
        let position = self.current.position;
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments,
                              position })
    }

    /// Parses the bracketed part of an index or slice expression.
    ///
    /// Accepted shapes:
    /// ```text
    ///     left[i]      point index
    ///     left[:j]     slice from the start
    ///     left[i:]     slice to the end
    ///     left[i:j]    slice
    ///     left[:]      full slice
    /// ```
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self,
                                                                 left: Expression)
                                                                 -> ParseResult<Expression> {
        let position = self.current.position;
        self.next_token();

        let index = if self.current_is(TokenKind::Colon) {
            None
        } else {
            let index = self.parse_expression(Precedence::Lowest)?;
            if self.peek_is(TokenKind::Colon) {
                self.next_token();
            }
            Some(Box::new(index))
        };

        let has_colon = self.current_is(TokenKind::Colon);
        let end = if has_colon && !self.peek_is(TokenKind::RBracket) {
            self.next_token();
            Some(Box::new(self.parse_expression(Precedence::Lowest)?))
        } else {
            None
        };

        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { left: Box::new(left),
                               index,
                               has_colon,
                               end,
                               position })
    }

    /// Parses postfix `x++` and `x--`.
    pub(in crate::interpreter::parser) fn parse_postfix_step(&mut self,
                                                             operand: Expression)
                                                             -> ParseResult<Expression> {
        let position = self.current.position;
        let operand = Box::new(operand);

        Ok(if self.current_is(TokenKind::Increment) {
               Expression::Increment { operand,
                                       prefix: false,
                                       position }
           } else {
               Expression::Decrement { operand,
                                       prefix: false,
                                       position }
           })
    }

    /// Parses `start..end` (inclusive) and `start...end` (exclusive).
    ///
    /// Ranges have a precedence of their own, between comparisons and
    /// addition, so `1..n + 1` ranges up to `n + 1` and `a..b == c` compares
    /// the range.
    pub(in crate::interpreter::parser) fn parse_range_expression(&mut self,
                                                                 start: Expression)
                                                                 -> ParseResult<Expression> {
        let position = self.current.position;
        let inclusive = self.current_is(TokenKind::Range);

        self.next_token();
        let end = self.parse_expression(Precedence::Range)?;

        Ok(Expression::Range { start: Box::new(start),
                               inclusive,
                               end: Box::new(end),
                               position })
    }
}
