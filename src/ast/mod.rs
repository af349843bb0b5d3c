//! Abstract syntax tree produced by the parser
//!
//! Children sit behind `Rc` so the packrat memo table and the tree under
//! construction can share a subtree without copying it. Once the parser is
//! dropped every subtree has a single owner again. There are no
//! back-references, and nothing is mutated once the parser hands the tree out.

pub mod expression;
pub mod statement;

pub use expression::{BinOp, BinOpKind, Expr, Ident, IfExpr};
pub use statement::Stmt;

use std::rc::Rc;

/// The whole program: a sequence of function definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    pub functions: Vec<Function>,
}

/// `name() { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: Ident,
    pub body: Block,
}

/// A braced statement list. The value of the block is its `tail`, the final
/// expression written without a trailing `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub tail: Option<Rc<Expr>>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, tail: Option<Expr>) -> Self {
        Self {
            stmts,
            tail: tail.map(Rc::new),
        }
    }
}

/// Any node a grammar rule can yield.
///
/// Combinators pass these between rules; mergers pick them apart again to
/// build the typed tree above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Root),
    Function(Function),
    Block(Block),
    Stmt(Stmt),
    Expr(Expr),
    Ident(Ident),
}
