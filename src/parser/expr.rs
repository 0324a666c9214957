//! Expression parsing.
//!
//! Expressions are layered by precedence, each layer delegating to the
//! next-tighter layer for its operands:
//!
//! 1. object/array literals (only reachable from a value position)
//! 2. assignment (right-associative, lowest precedence)
//! 3. binary operators (precedence climbing over explicit stacks)
//! 4. prefix `not` (right-recursive)
//! 5. postfix chain: call, indexing, member access (each applied at most
//!    once per parse)
//! 6. grouping and literals
//!
//! The postfix layers intentionally do not loop: `a.b.c`, `a[i][j]` and
//! `f(x)(y)` are not parsable as chained postfix operations.

use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, ASSIGN_OP_LOOKUP, BINARY_OP_LOOKUP, MAX_BINDING_POWER},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::OpenCurly => parse_object_expr(parser),
        TokenKind::OpenBracket => parse_array_expr(parser),
        _ => parse_assignment_expr(parser),
    }
}

pub fn parse_object_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let mut fields = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        let key = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let value = parse_expr(parser)?;
        fields.push((key, value));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::Object { fields })
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let mut values = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseBracket {
        values.push(parse_expr(parser)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Array { values })
}

pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let subject = parse_binary_expr(parser)?;

    if !parser.has_tokens() {
        return Ok(subject);
    }

    let op = match ASSIGN_OP_LOOKUP.get(&parser.current_token_kind()) {
        Some(op) => *op,
        None => return Ok(subject),
    };
    parser.advance();

    // Right-recursive: a = b = c groups as a = (b = c)
    let value = parse_assignment_expr(parser)?;

    Ok(Expr::Assign {
        subject: Box::new(subject),
        value: Box::new(value),
        op,
    })
}

/// Parses a run of binary operators by precedence climbing.
///
/// Operands and operators are kept on explicit stacks seeded with one
/// unary-level operand. On each incoming operator, pending operators of
/// greater or equal binding power are folded first, which makes equal
/// powers group left.
pub fn parse_binary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr_stack = vec![parse_unary_expr(parser)?];
    let mut op_stack: Vec<BinaryOp> = Vec::new();
    let mut last_power = MAX_BINDING_POWER;

    while parser.has_tokens() {
        let op = match maybe_parse_binary_op(parser) {
            Some(op) => op,
            None => break,
        };
        let power = binding_power(op);
        let right = parse_unary_expr(parser)?;

        while power <= last_power && expr_stack.len() > 1 {
            let folded_right = expr_stack.pop().unwrap();
            let pending = op_stack.pop().unwrap();
            last_power = binding_power(pending);

            if last_power < power {
                expr_stack.push(folded_right);
                op_stack.push(pending);
                break;
            }

            let left = expr_stack.pop().unwrap();
            expr_stack.push(Expr::Binary {
                left: Box::new(left),
                right: Box::new(folded_right),
                op: pending,
            });
        }

        expr_stack.push(right);
        op_stack.push(op);
    }

    // Fold whatever remains into a single expression
    while expr_stack.len() > 1 {
        let right = expr_stack.pop().unwrap();
        let left = expr_stack.pop().unwrap();
        let op = op_stack.pop().unwrap();
        expr_stack.push(Expr::Binary {
            left: Box::new(left),
            right: Box::new(right),
            op,
        });
    }

    Ok(expr_stack.pop().unwrap())
}

fn maybe_parse_binary_op(parser: &mut Parser) -> Option<BinaryOp> {
    let op = BINARY_OP_LOOKUP.get(&parser.current_token_kind()).copied()?;
    parser.advance();
    Some(op)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.has_tokens() && parser.current_token_kind() == TokenKind::Not {
        parser.advance();
        let subject = parse_unary_expr(parser)?;
        return Ok(Expr::Unary {
            subject: Box::new(subject),
            op: UnaryOp::Not,
        });
    }

    parse_call_expr(parser)
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let subject = parse_indexing_expr(parser)?;

    if !parser.has_tokens() || parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(subject);
    }
    parser.advance();

    let mut args = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen
        && parser.current_token_kind() != TokenKind::Comma
    {
        args.push(parse_expr(parser)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            // Trailing comma before the closing paren
            if parser.current_token_kind() == TokenKind::CloseParen {
                break;
            }
            args.push(parse_expr(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call {
        subject: Box::new(subject),
        args,
    })
}

pub fn parse_indexing_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let subject = parse_accessing_expr(parser)?;

    if !parser.has_tokens() || parser.current_token_kind() != TokenKind::OpenBracket {
        return Ok(subject);
    }
    parser.advance();

    let index = parse_expr(parser)?;

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Indexing {
        subject: Box::new(subject),
        index: Box::new(index),
    })
}

pub fn parse_accessing_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let subject = parse_group_expr(parser)?;

    if !parser.has_tokens() || parser.current_token_kind() != TokenKind::Dot {
        return Ok(subject);
    }
    parser.advance();

    let field = parser.expect(TokenKind::Identifier)?.value;

    Ok(Expr::Accessing {
        subject: Box::new(subject),
        field,
    })
}

pub fn parse_group_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.has_tokens() && parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        let expr = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(expr);
    }

    parse_value_expr(parser)
}

pub fn parse_value_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.has_tokens() {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("a value"),
            },
            parser.get_position(),
        ));
    }

    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let value = parser.advance().value.clone();
            Ok(Expr::Id(value))
        }
        TokenKind::Int => {
            let token = parser.current_token().clone();
            match token.value.parse::<i64>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Int(value))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::Float => {
            let token = parser.current_token().clone();
            match token.value.parse::<f64>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Float(value))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::Char => {
            let value = parser.current_token().value.chars().next().unwrap_or('\0');
            parser.advance();
            Ok(Expr::Char(value))
        }
        TokenKind::String => {
            let value = parser.advance().value.clone();
            Ok(Expr::String(value))
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expr::Bool(true))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expr::Bool(false))
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: String::from("a value"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}
