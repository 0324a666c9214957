//! Expression nodes of the AST.
//!
//! Expressions are a closed sum type: every consumer matches exhaustively,
//! so adding a variant is a compile-time-checked change everywhere.
//! Nodes own their children outright; the tree is acyclic and immutable
//! once built.

/// An expression node.
///
/// `Accessing`, `Indexing` and `Call` are the postfix forms; `Assign` is
/// lowest precedence and right-associative.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Id(String),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    Bool(bool),
    Array {
        values: Vec<Expr>,
    },
    Object {
        fields: Vec<(String, Expr)>,
    },
    Accessing {
        subject: Box<Expr>,
        field: String,
    },
    Indexing {
        subject: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        subject: Box<Expr>,
        args: Vec<Expr>,
    },
    Unary {
        subject: Box<Expr>,
        op: UnaryOp,
    },
    Binary {
        left: Box<Expr>,
        right: Box<Expr>,
        op: BinaryOp,
    },
    Assign {
        subject: Box<Expr>,
        value: Box<Expr>,
        op: AssignOp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Assignment operator tags.
///
/// `Increment`/`Decrement` are parse-level markers for `+=`/`-=`; no
/// desugaring happens in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Increment,
    Decrement,
}
