// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Monkey source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written with one-character lookahead, which is all the Monkey
//! grammar needs: the only overlapping token shapes are `=`/`==` and
//! `!`/`!=`.
//!
//! # Design Principles
//!
//! - **Error recovery**: the lexer never fails; unrecognized characters
//!   become [`TokenKind::Illegal`] tokens and the parser decides what to do
//! - **Exact literals**: every token carries the exact substring that
//!   produced it, except `EOF` whose literal is empty
//! - **On-demand**: tokens are produced one at a time; nothing is buffered
//!
//! # Example
//!
//! ```
//! use monkey_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! assert_eq!(tokens.len(), 3); // x, +, 1 (EOF excluded from iterator)
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use super::{Token, TokenKind};

/// A lexer that tokenizes Monkey source code.
///
/// Call [`Lexer::next_token`] to pull tokens one at a time; after the end of
/// input it returns `EOF` forever. The lexer also implements [`Iterator`]
/// for easy consumption, yielding tokens up to (and excluding) `EOF`.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Extracts the source text from `start` to the current position.
    fn text_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }

    /// Skips ASCII whitespace (space, tab, newline, carriage return).
    fn skip_whitespace(&mut self) {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    /// Lexes the next token. At end of input, returns `EOF` forever.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::eof();
        };

        match c {
            // Identifiers and keywords: maximal run of letters/underscores
            'a'..='z' | 'A'..='Z' | '_' => {
                self.advance_while(is_letter);
                let text = self.text_from(start);
                Token::new(TokenKind::lookup_identifier(text), text)
            }

            // Integer literals: maximal run of digits
            '0'..='9' => {
                self.advance_while(|c| c.is_ascii_digit());
                Token::new(TokenKind::Integer, self.text_from(start))
            }

            // `=` or `==`
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Equal, self.text_from(start))
                } else {
                    Token::new(TokenKind::Assign, self.text_from(start))
                }
            }

            // `!` or `!=`
            '!' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEqual, self.text_from(start))
                } else {
                    Token::new(TokenKind::Bang, self.text_from(start))
                }
            }

            // Single-character tokens
            '+' => self.single(TokenKind::Plus, start),
            '-' => self.single(TokenKind::Minus, start),
            '*' => self.single(TokenKind::Asterisk, start),
            '/' => self.single(TokenKind::Slash, start),
            '<' => self.single(TokenKind::LessThan, start),
            '>' => self.single(TokenKind::GreaterThan, start),
            ',' => self.single(TokenKind::Comma, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '(' => self.single(TokenKind::LeftParen, start),
            ')' => self.single(TokenKind::RightParen, start),
            '{' => self.single(TokenKind::LeftBrace, start),
            '}' => self.single(TokenKind::RightBrace, start),

            // Unknown character - error recovery
            _ => self.single(TokenKind::Illegal, start),
        }
    }

    /// Consumes one character and produces a token whose literal is exactly
    /// that character.
    fn single(&mut self, kind: TokenKind, start: usize) -> Token {
        self.advance();
        Token::new(kind, self.text_from(start))
    }
}

/// Returns `true` for the characters that may appear in an identifier:
/// ASCII letters and underscore.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() { None } else { Some(token) }
    }
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
///
/// For most use cases, prefer using the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Convenience function to lex source into a vector of tokens including EOF.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        lex(source).iter().map(Token::kind).collect()
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
        assert!(lex("   \t\n\r  ").is_empty());
    }

    #[test]
    fn lex_punctuation() {
        let tokens = lex("=+(){},;");
        let expected = [
            (TokenKind::Assign, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::LeftParen, "("),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind(), kind);
            assert_eq!(token.literal(), literal);
        }
    }

    #[test]
    fn lex_program_fragment() {
        let source = "let five = 5;\n\
                      let ten = 10;\n\
                      \n\
                      let add = fn(x, y) {\n\
                      \tx + y;\n\
                      };\n\
                      \n\
                      let result = add(five, ten);\n\
                      !-/*5;\n\
                      5 < 10 > 5;\n\
                      \n\
                      if (5 < 10) {\n\
                      \treturn true;\n\
                      } else {\n\
                      \treturn false;\n\
                      }\n\
                      \n\
                      10 == 10;\n\
                      10 != 9;\n";

        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Integer, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Identifier, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Identifier, "add"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "ten"),
            (TokenKind::RightParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Integer, "5"),
            (TokenKind::LessThan, "<"),
            (TokenKind::Integer, "10"),
            (TokenKind::GreaterThan, ">"),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Integer, "5"),
            (TokenKind::LessThan, "<"),
            (TokenKind::Integer, "10"),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Integer, "10"),
            (TokenKind::Equal, "=="),
            (TokenKind::Integer, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Integer, "10"),
            (TokenKind::NotEqual, "!="),
            (TokenKind::Integer, "9"),
            (TokenKind::Semicolon, ";"),
        ];

        let mut lexer = Lexer::new(source);
        for (i, (kind, literal)) in expected.iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(token.kind(), *kind, "token {i} kind");
            assert_eq!(token.literal(), *literal, "token {i} literal");
        }
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn lex_identifiers() {
        assert_eq!(
            lex_kinds("foo bar _private camelCase"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn lex_keywords_not_identifiers() {
        assert_eq!(
            lex_kinds("fn let true false if else return"),
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
            ]
        );
    }

    #[test]
    fn lex_keyword_prefix_is_identifier() {
        // `lettuce` starts with `let` but is one identifier run
        let tokens = lex("lettuce fns");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].literal(), "lettuce");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].literal(), "fns");
    }

    #[test]
    fn lex_two_character_operators() {
        let tokens = lex("== != = !");
        assert_eq!(tokens[0].kind(), TokenKind::Equal);
        assert_eq!(tokens[0].literal(), "==");
        assert_eq!(tokens[1].kind(), TokenKind::NotEqual);
        assert_eq!(tokens[1].literal(), "!=");
        assert_eq!(tokens[2].kind(), TokenKind::Assign);
        assert_eq!(tokens[2].literal(), "=");
        assert_eq!(tokens[3].kind(), TokenKind::Bang);
        assert_eq!(tokens[3].literal(), "!");
    }

    #[test]
    fn lex_adjacent_runs_no_double_advance() {
        // An identifier or integer run must stop exactly at the next
        // character, without swallowing it.
        let tokens = lex("add(a1);");
        // `a1` is `a` then `1`: identifiers do not contain digits
        let literals: Vec<_> = tokens.iter().map(Token::literal).collect();
        assert_eq!(literals, vec!["add", "(", "a", "1", ")", ";"]);
    }

    #[test]
    fn lex_illegal_characters() {
        let tokens = lex("@ #~");
        let expected = [
            (TokenKind::Illegal, "@"),
            (TokenKind::Illegal, "#"),
            (TokenKind::Illegal, "~"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind(), kind);
            assert_eq!(token.literal(), literal);
        }
    }

    #[test]
    fn lex_illegal_multibyte_character() {
        let tokens = lex("1 ยง 2");
        assert_eq!(tokens[0].kind(), TokenKind::Integer);
        assert_eq!(tokens[1].kind(), TokenKind::Illegal);
        assert_eq!(tokens[1].literal(), "ยง");
        assert_eq!(tokens[2].kind(), TokenKind::Integer);
    }

    #[test]
    fn eof_forever() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind(), TokenKind::Identifier);
        for _ in 0..4 {
            let token = lexer.next_token();
            assert!(token.is_eof());
            assert_eq!(token.literal(), "");
        }
    }

    #[test]
    fn lex_with_eof_ends_with_eof() {
        let tokens = lex_with_eof("1 + 2");
        assert_eq!(tokens.len(), 4);
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn literals_partition_input() {
        // Sum of literal lengths plus skipped whitespace equals the input
        // length; two-character operators carry their full spelling.
        let source = "let x = a == b != !c;";
        let literal_bytes: usize = lex(source).iter().map(|t| t.literal().len()).sum();
        let whitespace_bytes = source
            .chars()
            .filter(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
            .count();
        assert_eq!(literal_bytes + whitespace_bytes, source.len());
    }
}
