use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let expr = parse_expr_at(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixHandler {
                    kind: token_kind,
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, fold it into lhs
    while parser.current_binding_power() > bp {
        let led = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => break,
        };

        let led_bp = parser.current_binding_power();
        left = led(parser, left, led_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Int => {
            let value = match token.value.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    // Keep the node so the statement survives, the value is meaningless
                    parser.record(Error::new(
                        ErrorImpl::NumberParseError {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    ));
                    0
                }
            };

            Ok(Expression::Integer(IntegerLiteral { token, value }))
        }
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => Ok(Expression::Identifier(Identifier {
            value: token.value.clone(),
            token,
        })),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    // if (<condition>) { ... } else { ... }
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.skip(TokenKind::Else) {
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expression, Error> {
    // fn(a, b) { ... }
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if !parser.skip(TokenKind::CloseParen) {
        loop {
            let name = parser.expect(TokenKind::Identifier)?;
            parameters.push(Identifier {
                value: name.value.clone(),
                token: name,
            });

            if !parser.skip(TokenKind::Comma) {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    let token = parser.advance();

    let mut arguments = vec![];
    if !parser.skip(TokenKind::CloseParen) {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);

            if !parser.skip(TokenKind::Comma) {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    Ok(Expression::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}
