//! Operator lookup tables for expression parsing.
//!
//! Maps operator tokens to their AST tags and defines the binding powers
//! consulted by the precedence-climbing loop.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::{AssignOp, BinaryOp},
    lexer::tokens::TokenKind,
};

lazy_static! {
    pub static ref BINARY_OP_LOOKUP: HashMap<TokenKind, BinaryOp> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, BinaryOp::Add);
        map.insert(TokenKind::Dash, BinaryOp::Subtract);
        map.insert(TokenKind::Star, BinaryOp::Multiply);
        map.insert(TokenKind::Equals, BinaryOp::Eq);
        map.insert(TokenKind::NotEquals, BinaryOp::Ne);
        map.insert(TokenKind::Less, BinaryOp::Lt);
        map.insert(TokenKind::LessEquals, BinaryOp::Lte);
        map.insert(TokenKind::Greater, BinaryOp::Gt);
        map.insert(TokenKind::GreaterEquals, BinaryOp::Gte);
        map
    };
    pub static ref ASSIGN_OP_LOOKUP: HashMap<TokenKind, AssignOp> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Assignment, AssignOp::Assign);
        map.insert(TokenKind::PlusEquals, AssignOp::Increment);
        map.insert(TokenKind::MinusEquals, AssignOp::Decrement);
        map
    };
}

/// Binding power just above every binary operator, used to seed the
/// precedence-climbing fold loop.
pub const MAX_BINDING_POWER: u8 = 5;

/// Returns the binding power of a binary operator.
///
/// All binary operators are left-associative; equal powers fold left.
pub fn binding_power(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Multiply => 4,
        BinaryOp::Add | BinaryOp::Subtract => 3,
        BinaryOp::Lt | BinaryOp::Lte | BinaryOp::Gt | BinaryOp::Gte => 2,
        BinaryOp::Eq | BinaryOp::Ne => 1,
    }
}
