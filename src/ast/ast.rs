use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{
    expressions::{
        BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
        PrefixExpr,
    },
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// Every statement form the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    /// Text of the token the statement starts with.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.value,
            Statement::Return(stmt) => &stmt.token.value,
            Statement::Expression(stmt) => &stmt.token.value,
        }
    }

    /// Returns the span of the statement's leading token.
    pub fn get_span(&self) -> &Span {
        match self {
            Statement::Let(stmt) => &stmt.token.span,
            Statement::Return(stmt) => &stmt.token.span,
            Statement::Expression(stmt) => &stmt.token.span,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
///
/// Every expression form the Pratt parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => &expr.token.value,
            Expression::Integer(expr) => &expr.token.value,
            Expression::Boolean(expr) => &expr.token.value,
            Expression::Prefix(expr) => &expr.token.value,
            Expression::Infix(expr) => &expr.token.value,
            Expression::If(expr) => &expr.token.value,
            Expression::Function(expr) => &expr.token.value,
            Expression::Call(expr) => &expr.token.value,
        }
    }

    /// Returns the span of the token that produced the expression.
    /// For infix and call expressions this is the operator token.
    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Identifier(expr) => &expr.token.span,
            Expression::Integer(expr) => &expr.token.span,
            Expression::Boolean(expr) => &expr.token.span,
            Expression::Prefix(expr) => &expr.token.span,
            Expression::Infix(expr) => &expr.token.span,
            Expression::If(expr) => &expr.token.span,
            Expression::Function(expr) => &expr.token.span,
            Expression::Call(expr) => &expr.token.span,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => expr.fmt(f),
            Expression::Integer(expr) => expr.fmt(f),
            Expression::Boolean(expr) => expr.fmt(f),
            Expression::Prefix(expr) => expr.fmt(f),
            Expression::Infix(expr) => expr.fmt(f),
            Expression::If(expr) => expr.fmt(f),
            Expression::Function(expr) => expr.fmt(f),
            Expression::Call(expr) => expr.fmt(f),
        }
    }
}

/// Program
///
/// The parse root, statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}
