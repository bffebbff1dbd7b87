use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, statements::BlockStmt};

// LITERALS

/// Identifier
/// A bare name. Also used for `let` targets and function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// Renders as its source text, so an out of range literal still shows what was written.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// OPERATORS

/// Prefix Expression
/// `!x` or `-x`, rendered as `(<operator><right>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Binary operator application, rendered as `(<left> <operator> <right>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// CONTROL FLOW AND FUNCTIONS

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();

        write!(f, "{}({}) {}", self.token.value, parameters.join(", "), self.body)
    }
}

/// Call Expression
/// `token` is the opening parenthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
