// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing for Monkey.
//!
//! This module contains the Pratt loop and all expression handlers,
//! extracted from the main `Parser` implementation:
//!
//! - Leaf expressions (identifiers, integer and boolean literals)
//! - Prefix operators (`!`, `-`)
//! - Binary operators (`+ - * / < > == !=`)
//! - Grouped expressions (`( ... )`)
//! - Conditionals (`if`/`else`)
//! - Function literals (`fn(x, y) { ... }`)
//! - Calls (`add(1, 2)`)
//!
//! Handlers return `Option<Expression>`: a failed production yields `None`
//! with the error already recorded, never a node with an empty required
//! slot.

use crate::ast::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, PrefixExpression,
};
use crate::source_analysis::{ParseError, TokenKind};

use super::{Parser, Precedence};

/// Returns `true` for the token kinds with an infix handler: the eight
/// binary operators, plus `(` as the call operator.
fn has_infix_handler(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::LeftParen
    )
}

impl Parser<'_> {
    // ========================================================================
    // The Pratt loop
    // ========================================================================

    /// Parses an expression whose operators bind more tightly than
    /// `min_precedence`.
    ///
    /// Dispatches the current token to its prefix handler, then keeps
    /// extending the result leftward while the lookahead token has an infix
    /// handler that binds strictly tighter than `min_precedence`. A
    /// semicolon in the lookahead always stops the loop.
    pub(super) fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && min_precedence < self.peek_precedence() {
            if !has_infix_handler(self.peek.kind()) {
                return Some(left);
            }

            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Dispatches the current token to its prefix handler.
    ///
    /// Records a "no prefix parse function" error when the token cannot
    /// begin an expression.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind() {
            TokenKind::Identifier => Some(self.parse_identifier()),
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::LeftParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.errors.push(ParseError::no_prefix_parse(kind));
                None
            }
        }
    }

    /// Dispatches the current token to its infix handler. Only called for
    /// kinds that [`has_infix_handler`] accepts.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current.kind() {
            TokenKind::LeftParen => self.parse_call_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    // ========================================================================
    // Prefix handlers
    // ========================================================================

    /// Builds an identifier from the current token.
    fn parse_identifier(&self) -> Expression {
        Expression::Identifier(Identifier::new(self.current.clone()))
    }

    /// Builds an integer literal, parsing the token text as base-10 `i64`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal().parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                self.errors
                    .push(ParseError::invalid_integer(token.literal_owned()));
                None
            }
        }
    }

    /// Builds a boolean literal from the current token.
    fn parse_boolean(&self) -> Expression {
        Expression::Boolean(BooleanLiteral {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        })
    }

    /// Parses `!<expr>` or `-<expr>`; the operand binds at `PREFIX`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal_owned();

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right,
        }))
    }

    /// Parses `( <expr> )`. The parentheses leave no node of their own;
    /// grouping is visible only through precedence.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        expression
    }

    /// Parses `if (<cond>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }

        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::LeftBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition,
            consequence,
            alternative,
        }))
    }

    /// Parses `fn(<params>) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses a comma-separated parameter list up to the closing `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(Identifier::new(self.current.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(Identifier::new(self.current.clone()));
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(parameters)
    }

    // ========================================================================
    // Infix handlers
    // ========================================================================

    /// Parses `<left> <op> <right>`.
    ///
    /// The right operand binds at the operator's own precedence, so
    /// equal-precedence operators group left.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal_owned();
        let precedence = self.current_precedence();

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right,
        }))
    }

    /// Parses a call: `(` in infix position, with the already-parsed `left`
    /// as the callee.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parses a comma-separated argument list up to the closing `)`. Each
    /// argument is a full expression at `LOWEST`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(arguments)
    }
}
