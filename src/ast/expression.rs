use std::rc::Rc;

use super::Block;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Int(i64),
    Ident(Ident),
    BinOp(BinOp),
    If(IfExpr),
    Block(Block),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident::new(name))
    }

    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Expr::BinOp(BinOp {
            op,
            lhs: Rc::new(lhs),
            rhs: Rc::new(rhs),
        })
    }

    pub fn if_then(cond: Expr, then: Expr, otherwise: Option<Expr>) -> Self {
        Expr::If(IfExpr {
            cond: Rc::new(cond),
            then: Rc::new(then),
            otherwise: otherwise.map(Rc::new),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Assign,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

impl BinOpKind {
    /// How the operator is written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Assign => "=",
            BinOpKind::Eq => "==",
            BinOpKind::Neq => "!=",
            BinOpKind::Lt => "<",
            BinOpKind::Gt => ">",
            BinOpKind::Lte => "<=",
            BinOpKind::Gte => ">=",
        }
    }
}

/// Binary operation expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinOp {
    pub op: BinOpKind,
    pub lhs: Rc<Expr>,
    pub rhs: Rc<Expr>,
}

/// Conditional expression, `if c then a` or `if c then a else b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpr {
    pub cond: Rc<Expr>,
    pub then: Rc<Expr>,
    pub otherwise: Option<Rc<Expr>>,
}
