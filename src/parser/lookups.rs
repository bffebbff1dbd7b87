use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first. A token without an infix handler binds at `Lowest`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(TokenKind::Equals, BindingPower::Equals, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equals, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::LessGreater, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::LessGreater, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Product, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_binary_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::Fn, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
