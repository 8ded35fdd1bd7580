// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Monkey.
//!
//! The AST represents the structure of a Monkey program after parsing.
//! Statements and expressions are closed tagged variants ([`Statement`],
//! [`Expression`]); every concrete node keeps the token that produced its
//! leading position, exposed through `token_literal`.
//!
//! # Canonical form
//!
//! Each node implements [`std::fmt::Display`], producing a deterministic,
//! fully parenthesized rendering. This form is a public contract: it is how
//! tests verify the parser's precedence and associativity decisions, and
//! re-parsing a printed program yields a program that prints identically.
//!
//! # Example
//!
//! ```
//! use monkey_core::source_analysis::parse;
//!
//! let (program, errors) = parse("-a * b");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "((-a) * b)");
//! ```
//!
//! Nodes are never mutated after construction; the parser fills every slot
//! when it builds them.

use std::fmt;

use ecow::EcoString;

use crate::source_analysis::Token;

/// The root node: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Creates a program from its statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Returns the literal of the first statement's leading token, or the
    /// empty string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", Statement::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A statement: one of the three top-level production shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let(LetStatement),
    /// `return <value>;`
    Return(ReturnStatement),
    /// Any other statement: a bare expression.
    Expression(ExpressionStatement),
}

impl Statement {
    /// Returns the literal of this statement's leading token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let(s) => s.token.literal(),
            Self::Return(s) => s.token.literal(),
            Self::Expression(s) => s.token.literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(s) => write!(f, "{s}"),
            Self::Return(s) => write!(f, "{s}"),
            Self::Expression(s) => write!(f, "{s}"),
        }
    }
}

/// A `let` binding: `let x = 5;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    /// The bound name.
    pub name: Identifier,
    /// The bound value. Absent only when the value expression failed to
    /// parse; the error is already recorded.
    pub value: Option<Expression>,
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// A `return` statement: `return 5;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    /// The returned value, if its expression parsed.
    pub return_value: Option<Expression>,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal())?;
        if let Some(value) = &self.return_value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// A bare expression in statement position: `x + 10;`
///
/// This is what makes single-line REPL input like `5 + 5` a valid program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    /// The expression, or `None` when no prefix handler matched (the error
    /// is already recorded).
    pub expression: Option<Expression>,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(expression) = &self.expression {
            write!(f, "{expression}")?;
        }
        Ok(())
    }
}

/// A brace-delimited statement sequence: the body of an `if` branch or a
/// function literal. Not a standalone top-level production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    /// The statements in the block, in source order.
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Returns the literal of the opening brace token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression: a closed set of node shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A name: `foobar`
    Identifier(Identifier),
    /// An integer literal: `5`
    Integer(IntegerLiteral),
    /// A boolean literal: `true`
    Boolean(BooleanLiteral),
    /// A prefix operator application: `!ok`, `-5`
    Prefix(PrefixExpression),
    /// A binary operator application: `a + b`
    Infix(InfixExpression),
    /// A conditional: `if (x < y) { x } else { y }`
    If(IfExpression),
    /// A function literal: `fn(x, y) { x + y; }`
    Function(FunctionLiteral),
    /// A call: `add(1, 2)`
    Call(CallExpression),
}

impl Expression {
    /// Returns the literal of this expression's leading token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(e) => e.token.literal(),
            Self::Integer(e) => e.token.literal(),
            Self::Boolean(e) => e.token.literal(),
            Self::Prefix(e) => e.token.literal(),
            Self::Infix(e) => e.token.literal(),
            Self::If(e) => e.token.literal(),
            Self::Function(e) => e.token.literal(),
            Self::Call(e) => e.token.literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(e) => write!(f, "{e}"),
            Self::Integer(e) => write!(f, "{e}"),
            Self::Boolean(e) => write!(f, "{e}"),
            Self::Prefix(e) => write!(f, "{e}"),
            Self::Infix(e) => write!(f, "{e}"),
            Self::If(e) => write!(f, "{e}"),
            Self::Function(e) => write!(f, "{e}"),
            Self::Call(e) => write!(f, "{e}"),
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `IDENT` token.
    pub token: Token,
    /// The textual name.
    pub value: EcoString,
}

impl Identifier {
    /// Creates an identifier from its token, taking the name from the
    /// token's literal.
    #[must_use]
    pub fn new(token: Token) -> Self {
        let value = token.literal_owned();
        Self { token, value }
    }

    /// Returns the literal of the identifier token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An integer literal. The token keeps the spelling; `value` is the parsed
/// 64-bit signed integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The `INT` token.
    pub token: Token,
    /// The parsed value.
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal())
    }
}

/// A boolean literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    /// The `true` or `false` token.
    pub token: Token,
    /// The literal value.
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal())
    }
}

/// A prefix operator application. Prints as `(<op><right>)` with no space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    /// The operator token (`!` or `-`).
    pub token: Token,
    /// The operator spelling.
    pub operator: EcoString,
    /// The operand.
    pub right: Box<Expression>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// A binary operator application. Prints as `(<left> <op> <right>)`,
/// fully parenthesized at every level so precedence decisions are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    /// The operator token.
    pub token: Token,
    /// The left operand.
    pub left: Box<Expression>,
    /// The operator spelling.
    pub operator: EcoString,
    /// The right operand.
    pub right: Box<Expression>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// A conditional expression. The alternative is absent when there is no
/// `else` branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpression {
    /// The `if` token.
    pub token: Token,
    /// The condition.
    pub condition: Box<Expression>,
    /// The `{ ... }` taken when the condition holds.
    pub consequence: BlockStatement,
    /// The `else { ... }` branch, if any.
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {alternative}")?;
        }
        Ok(())
    }
}

/// A function literal: parameters plus a body block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// The `fn` token.
    pub token: Token,
    /// The parameter names, in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.literal())?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, "){}", self.body)
    }
}

/// A call expression. `function` is whatever expression reached call
/// position: an identifier, a function literal, or anything else the
/// grammar produced there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    /// The `(` token that opened the argument list.
    pub token: Token,
    /// The callee.
    pub function: Box<Expression>,
    /// The arguments, in source order.
    pub arguments: Vec<Expression>,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}
