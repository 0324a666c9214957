//! Statement parsing.
//!
//! Statements are dispatched on their leading token. Block bodies are
//! parsed by `parse_statements`, which stops at (and never consumes) the
//! `end`/`else` terminator; the enclosing construct consumes it.

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Tokens that may legally follow a bare `return`, making its value absent.
const RETURN_LOOKAHEAD: [TokenKind; 8] = [
    TokenKind::Semicolon,
    TokenKind::Func,
    TokenKind::Return,
    TokenKind::While,
    TokenKind::Break,
    TokenKind::If,
    TokenKind::Let,
    TokenKind::End,
];

/// Parses statements until end of input or a block terminator.
///
/// Statement separators (`;`) are skipped between statements. The
/// terminator (`end` or `else`) is left in the stream for the caller.
pub fn parse_statements(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    skip_separators(parser);
    while parser.has_tokens() && !is_block_terminator(parser.current_token_kind()) {
        statements.push(parse_stmt(parser)?);
        skip_separators(parser);
    }

    Ok(statements)
}

fn skip_separators(parser: &mut Parser) {
    while parser.has_tokens() && parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

fn is_block_terminator(kind: TokenKind) -> bool {
    kind == TokenKind::End || kind == TokenKind::Else
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Func => parse_func_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Break => parse_break_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::Let => parse_let_stmt(parser),
        _ => parse_expr_stmt(parser),
    }
}

pub fn parse_func_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let subject = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseParen {
        params.push(parser.expect(TokenKind::Identifier)?.value);

        // A missing comma ends the list; the closing paren is checked below.
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_statements(parser)?;

    let unterminated = Error::new(
        ErrorImpl::UnterminatedBlock {
            block: String::from("func"),
            found: parser.current_token().value.clone(),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::End, Some(unterminated))?;

    Ok(Stmt::Func {
        subject,
        params,
        body,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    if !parser.has_tokens() || RETURN_LOOKAHEAD.contains(&parser.current_token_kind()) {
        return Ok(Stmt::Return { value: None });
    }

    Ok(Stmt::Return {
        value: Some(parse_expr(parser)?),
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::Then)?;

    let body = parse_statements(parser)?;

    let unterminated = Error::new(
        ErrorImpl::UnterminatedBlock {
            block: String::from("while"),
            found: parser.current_token().value.clone(),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::End, Some(unterminated))?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    Ok(Stmt::Break)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::Then)?;

    let truthy = parse_statements(parser)?;

    match parser.current_token_kind() {
        TokenKind::End => {
            parser.advance();
            Ok(Stmt::If {
                condition,
                truthy,
                falsy: Vec::new(),
            })
        }
        TokenKind::Else => {
            parser.advance();
            if parser.current_token_kind() == TokenKind::If {
                // else-if chains nest as the sole falsy statement
                let chained = parse_if_stmt(parser)?;
                Ok(Stmt::If {
                    condition,
                    truthy,
                    falsy: vec![chained],
                })
            } else {
                let falsy = parse_statements(parser)?;
                parser.expect(TokenKind::End)?;
                Ok(Stmt::If {
                    condition,
                    truthy,
                    falsy,
                })
            }
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnterminatedBlock {
                    block: String::from("if"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let subject = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser)?;

    Ok(Stmt::Let { subject, value })
}

pub fn parse_expr_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Expr {
        value: parse_expr(parser)?,
    })
}
