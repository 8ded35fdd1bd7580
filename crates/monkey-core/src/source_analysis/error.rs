// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Monkey parser.
//!
//! The parser accumulates errors instead of failing fast, so these values
//! end up in [`Parser::errors`](super::Parser::errors) in discovery order.
//! They integrate with [`miette`] for CLI error reporting, and their
//! `Display` forms are a stable contract asserted by tests.
//!
//! The lexer has no error type: unrecognized input becomes
//! [`TokenKind::Illegal`] tokens and the parser decides what to do.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::TokenKind;

/// A parse error recorded while building the AST.
///
/// The failing production returns no node; the outer statement loop keeps
/// going, so a single parse can record several of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A structural error from an `expect_peek` mismatch.
    #[error("expected next token to be {expected}, got {actual} instead")]
    #[diagnostic(code(monkey::parse::unexpected_token))]
    UnexpectedToken {
        /// The kind the grammar required next.
        expected: TokenKind,
        /// The kind actually found in the lookahead slot.
        actual: TokenKind,
    },

    /// An integer literal the lexer classified as `INT` but whose digits do
    /// not fit a 64-bit signed integer.
    #[error("could not parse \"{literal}\" as integer")]
    #[diagnostic(code(monkey::parse::invalid_integer))]
    InvalidInteger {
        /// The offending literal text.
        literal: EcoString,
    },

    /// A token appeared in expression position with no prefix handler.
    #[error("no prefix parse function for {kind} found")]
    #[diagnostic(code(monkey::parse::no_prefix_parse))]
    NoPrefixParse {
        /// The kind that cannot begin an expression.
        kind: TokenKind,
    },
}

impl ParseError {
    /// Creates an "expected next token" error.
    #[must_use]
    pub fn unexpected_token(expected: TokenKind, actual: TokenKind) -> Self {
        Self::UnexpectedToken { expected, actual }
    }

    /// Creates an "invalid integer literal" error.
    #[must_use]
    pub fn invalid_integer(literal: impl Into<EcoString>) -> Self {
        Self::InvalidInteger {
            literal: literal.into(),
        }
    }

    /// Creates a "no prefix parse function" error.
    #[must_use]
    pub fn no_prefix_parse(kind: TokenKind) -> Self {
        Self::NoPrefixParse { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_token_display() {
        let err = ParseError::unexpected_token(TokenKind::Assign, TokenKind::Integer);
        assert_eq!(err.to_string(), "expected next token to be =, got INT instead");

        let err = ParseError::unexpected_token(TokenKind::Identifier, TokenKind::Assign);
        assert_eq!(
            err.to_string(),
            "expected next token to be IDENT, got = instead"
        );
    }

    #[test]
    fn invalid_integer_display() {
        let err = ParseError::invalid_integer("9223372036854775808");
        assert_eq!(
            err.to_string(),
            "could not parse \"9223372036854775808\" as integer"
        );
    }

    #[test]
    fn no_prefix_parse_display() {
        let err = ParseError::no_prefix_parse(TokenKind::Semicolon);
        assert_eq!(err.to_string(), "no prefix parse function for ; found");

        let err = ParseError::no_prefix_parse(TokenKind::Eof);
        assert_eq!(err.to_string(), "no prefix parse function for EOF found");
    }
}
