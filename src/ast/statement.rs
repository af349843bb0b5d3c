use crate::ast::expression::Expr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `expr;`
    Semi(Expr),
    /// An expression with no terminating `;`, only valid as the last item of a block.
    Expr(Expr),
}
