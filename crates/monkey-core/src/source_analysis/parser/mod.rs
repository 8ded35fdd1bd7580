// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Top-down operator-precedence (Pratt) parser for Monkey source code.
//!
//! The parser pulls tokens from a [`Lexer`] one at a time, holding exactly
//! two of them (`current` and `peek`), and builds a [`Program`] of typed
//! statement and expression nodes.
//!
//! # Design Philosophy
//!
//! - **Errors accumulate** - a failed production returns no node and records
//!   a message; the statement loop keeps going so one parse reports all
//!   structural problems
//! - **No partial nodes** - every emitted node has all required slots filled;
//!   consumers must still consult [`Parser::errors`] before trusting a
//!   program parsed from suspect input
//! - **Fresh parser per input** - the two-token window and the error list
//!   are per-session; create a new parser for each source string
//!
//! # Operator Precedence (Pratt Parsing)
//!
//! Expression parsing dispatches on the current token to a prefix handler,
//! then consults a precedence table to decide whether the next token's infix
//! handler should extend the expression. Equal-precedence operators group
//! left because the loop only re-enters while the lookahead binds strictly
//! tighter.
//!
//! | Level | Operators | |
//! |-------|-----------|---|
//! | `EQUALS` | `==` `!=` | |
//! | `LESSGREATER` | `<` `>` | |
//! | `SUM` | `+` `-` | |
//! | `PRODUCT` | `*` `/` | |
//! | `PREFIX` | unary `!` `-` | |
//! | `CALL` | `(` in call position | |
//!
//! To add a new operator, add an entry to [`precedence_of`] and a handler
//! arm in the expressions module.
//!
//! # Usage
//!
//! ```
//! use monkey_core::source_analysis::parse;
//!
//! let (program, errors) = parse("let x = 3 + 4;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "let x = (3 + 4);");
//! ```

use crate::ast::{
    BlockStatement, ExpressionStatement, Identifier, LetStatement, Program, ReturnStatement,
    Statement,
};
use crate::source_analysis::{Lexer, ParseError, Token, TokenKind};

// Expression parsing lives in a sibling impl block
mod expressions;


/// Operator binding strength, from loosest to tightest.
///
/// The derived ordering is the precedence ordering: a later variant binds
/// more tightly. The Pratt loop recurses with the current operator's
/// precedence, which is what makes equal-precedence operators associate
/// left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The entry level for full expressions.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!` and `-`
    Prefix,
    /// `(` used as the call operator
    Call,
}

/// Gets the precedence of a token kind in infix position.
///
/// Any kind with no infix role has precedence [`Precedence::Lowest`], which
/// stops the Pratt loop.
#[must_use]
pub(super) fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Equal | TokenKind::NotEqual => Precedence::Equals,
        TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LeftParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// Parses a source string into a program.
///
/// This is the main entry point for parsing. It always returns a
/// [`Program`], even when there are syntax errors; check the returned
/// error list before trusting the tree.
///
/// # Examples
///
/// ```
/// use monkey_core::source_analysis::parse;
///
/// let (program, errors) = parse("add(1, 2 * 3);");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// The parser state: a lexer, the two-token window, and the error list.
pub struct Parser<'src> {
    /// The token source.
    lexer: Lexer<'src>,
    /// The token being parsed.
    current: Token,
    /// One token of lookahead.
    peek: Token,
    /// Accumulated errors, in discovery order.
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over the given lexer, priming the two-token window.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Advances the window: `peek` becomes `current`, the lexer supplies a
    /// new `peek`.
    fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Checks if the current token has the given kind.
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind() == kind
    }

    /// Checks if the lookahead token has the given kind.
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind() == kind
    }

    /// Returns the precedence of the lookahead token.
    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind())
    }

    /// Returns the precedence of the current token.
    fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind())
    }

    /// Expects the lookahead token to have the given kind, advancing onto it
    /// when it does.
    ///
    /// On a mismatch, records an error and returns `false`; the caller
    /// abandons its production.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.errors
                .push(ParseError::unexpected_token(kind, self.peek.kind()));
            false
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Returns the errors recorded so far, in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its error list.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    // ========================================================================
    // Statement Parsing
    // ========================================================================

    /// Parses statements until end of input.
    ///
    /// Always terminates: every statement production either advances through
    /// `expect_peek` or falls through to the driver's own advance.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Dispatches on the current token to a statement production.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => Some(self.parse_expression_statement()),
        }
    }

    /// Parses `let <ident> = <expr>;`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    /// Parses `return <expr>;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.next_token();
        let return_value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement {
            token,
            return_value,
        }))
    }

    /// Parses a bare expression in statement position.
    ///
    /// This production never fails: a missing expression leaves an empty
    /// slot, and the prefix-lookup error is already recorded.
    fn parse_expression_statement(&mut self) -> Statement {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Statement::Expression(ExpressionStatement { token, expression })
    }

    /// Parses a `{ ... }` statement sequence, stopping at `}` or end of
    /// input.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_is(TokenKind::RightBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("current", &self.current)
            .field("peek", &self.peek)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
