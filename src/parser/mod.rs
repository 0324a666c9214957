//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Statements are parsed by recursive
//! descent with dispatch on the leading keyword; binary expressions are
//! parsed by precedence climbing over an explicit operand/operator stack
//! pair. It handles:
//!
//! - Statement parsing (let bindings, functions, control flow)
//! - Expression parsing (binary ops, assignment, postfix chain, literals)
//! - Fatal error reporting on the first malformed construct
//!
//! Block bodies are terminated by `end`/`else` tokens which the statement
//! list parser leaves for the enclosing construct to consume.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
