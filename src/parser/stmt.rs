use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip(TokenKind::Semicolon);

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.advance();

    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Lowest)?;

    // A missing semicolon is tolerated, e.g. on the last line of input
    parser.skip(TokenKind::Semicolon);

    Ok(Statement::Let(LetStmt {
        token,
        name: Identifier {
            value: name.value.clone(),
            token: name,
        },
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip(TokenKind::Semicolon);

    Ok(Statement::Return(ReturnStmt { token, value }))
}

/// Parses `{ ... }`. Bad statements inside are recorded and skipped, but
/// reaching `EOF` before the closing brace fails the whole block.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.leave_nesting();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt) = parser.parse_stmt_recovering() {
            statements.push(stmt);
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt { token, statements })
}
