//! Parser state and top-level entry point.
//!
//! The `Parser` struct is a cursor over an immutable token stream: the
//! position is the only mutable state and it is owned exclusively by the
//! in-progress parse call. The token stream always ends with an `EOF`
//! sentinel; `Parser::new` appends one if the caller's stream lacks it.

use std::rc::Rc;

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::stmt::parse_statements;

/// The parser structure that maintains parsing state.
///
/// Holds the token stream and tracks the current position, and provides
/// methods for token inspection and consumption.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        // The lexer always ends its stream with the EOF sentinel, but the
        // token helpers index unconditionally, so guarantee it here for
        // streams built by hand.
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = match tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&file)),
            };
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span {
                start: end.clone(),
                end
            }));
        }

        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos).unwrap().kind
    }

    /// Advances to the next token and returns the token passed over.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get(self.pos - 1).unwrap()
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns
    /// the custom error, or a default error naming the expected kind and
    /// the actual token found.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind.to_string(),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            };
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    ///
    /// The `EOF` sentinel counts as end of input.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token, or a position
    /// just past the stream if the cursor has run off the end.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => Position(self.tokens.len() as u32, Rc::clone(&self.file)),
        }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It parses statements until
/// end of input and rejects anything left over (a stray `end` or `else`
/// at the top level is an error).
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens, file);

    let statements = parse_statements(&mut parser)?;

    if parser.has_tokens() {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(statements)
}
