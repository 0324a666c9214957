//! Statement nodes of the AST.

use super::expressions::Expr;

/// A statement node.
///
/// Block-bearing variants (`If`, `While`, `Func`) own their nested
/// statement lists; the `end`/`else` terminators that delimited them in
/// the source are consumed during parsing and not represented here.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr {
        value: Expr,
    },
    Let {
        subject: String,
        value: Expr,
    },
    If {
        condition: Expr,
        truthy: Vec<Stmt>,
        falsy: Vec<Stmt>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    Break,
    Func {
        subject: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    Return {
        value: Option<Expr>,
    },
}
