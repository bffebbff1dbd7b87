use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expression, Statement},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expression,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.value, self.value)
    }
}

/// An expression in statement position. `token` is the first token of the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expression,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Braced statement list used as the body of `if` and `fn`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}
