//! Expression rules, from assignment down to primary expressions

use crate::ast::{BinOpKind, Expr, Node};
use crate::parser::combinators::{BoxedCandidate, concat, optional, rule, select, skip};
use crate::parser::state::ParseResult;
use crate::token::TokenKind;

use super::{Parts, Rule};

/// A merger that keeps only the expression at `index`, e.g. the inside of
/// parentheses.
fn nth_expr(owner: Rule, index: usize) -> impl Fn(Vec<Option<Node>>) -> ParseResult<Node> {
    move |nodes| Parts::new(owner, nodes).expr(index).map(Node::Expr)
}

/// `lhs op... rhs` where `op` may span several tokens (`<` `=` for `<=`).
fn binary(
    owner: Rule,
    op: BinOpKind,
    lhs: Rule,
    operator: &[TokenKind],
    rhs: Rule,
) -> BoxedCandidate {
    let mut candidates = vec![rule(lhs)];
    candidates.extend(operator.iter().copied().map(skip));
    candidates.push(rule(rhs));
    let rhs_index = candidates.len() - 1;

    concat(
        move |nodes| {
            let mut parts = Parts::new(owner, nodes);
            let lhs = parts.expr(0)?;
            let rhs = parts.expr(rhs_index)?;
            Ok(Node::Expr(Expr::binary(op, lhs, rhs)))
        },
        candidates,
    )
}

/// Expr <- Assign / Expr2
pub fn expr() -> BoxedCandidate {
    rule(Rule::Assign) | rule(Rule::Expr2)
}

/// Assign <- ident "=" Expr2
pub fn assign() -> BoxedCandidate {
    binary(
        Rule::Assign,
        BinOpKind::Assign,
        Rule::Identifier,
        &[TokenKind::Assign],
        Rule::Expr2,
    )
}

/// Expr2 <- If / Cond
pub fn expr2() -> BoxedCandidate {
    rule(Rule::If) | rule(Rule::Cond)
}

/// If <- "if" Expr "then" Expr ("else" Expr)?
pub fn if_expr() -> BoxedCandidate {
    concat(
        |nodes| {
            let mut parts = Parts::new(Rule::If, nodes);
            let cond = parts.expr(0)?;
            let then = parts.expr(1)?;
            let otherwise = parts.opt_expr(2)?;
            Ok(Node::Expr(Expr::if_then(cond, then, otherwise)))
        },
        vec![
            concat(
                nth_expr(Rule::If, 1),
                vec![skip(TokenKind::If), rule(Rule::Expr)],
            ),
            concat(
                nth_expr(Rule::If, 1),
                vec![skip(TokenKind::Then), rule(Rule::Expr)],
            ),
            optional(concat(
                nth_expr(Rule::If, 1),
                vec![skip(TokenKind::Else), rule(Rule::Expr)],
            )),
        ],
    )
}

/// Cond <- Eq / Neq / Lte / Gte / Lt / Gt / Sum
///
/// Two-token operators come before their one-token prefixes so `<=` is never
/// read as `<` followed by a stray `=`.
pub fn cond() -> BoxedCandidate {
    select(vec![
        rule(Rule::Eq),
        rule(Rule::Neq),
        rule(Rule::Lte),
        rule(Rule::Gte),
        rule(Rule::Lt),
        rule(Rule::Gt),
        rule(Rule::Sum),
    ])
}

/// Eq <- Sum "=" "=" Cond
pub fn eq() -> BoxedCandidate {
    binary(
        Rule::Eq,
        BinOpKind::Eq,
        Rule::Sum,
        &[TokenKind::Assign, TokenKind::Assign],
        Rule::Cond,
    )
}

/// Neq <- Sum "!" "=" Cond
pub fn neq() -> BoxedCandidate {
    binary(
        Rule::Neq,
        BinOpKind::Neq,
        Rule::Sum,
        &[TokenKind::Bang, TokenKind::Assign],
        Rule::Cond,
    )
}

/// Lte <- Sum "<" "=" Cond
pub fn lte() -> BoxedCandidate {
    binary(
        Rule::Lte,
        BinOpKind::Lte,
        Rule::Sum,
        &[TokenKind::Lt, TokenKind::Assign],
        Rule::Cond,
    )
}

/// Gte <- Sum ">" "=" Cond
pub fn gte() -> BoxedCandidate {
    binary(
        Rule::Gte,
        BinOpKind::Gte,
        Rule::Sum,
        &[TokenKind::Gt, TokenKind::Assign],
        Rule::Cond,
    )
}

/// Lt <- Sum "<" Cond
pub fn lt() -> BoxedCandidate {
    binary(
        Rule::Lt,
        BinOpKind::Lt,
        Rule::Sum,
        &[TokenKind::Lt],
        Rule::Cond,
    )
}

/// Gt <- Sum ">" Cond
pub fn gt() -> BoxedCandidate {
    binary(
        Rule::Gt,
        BinOpKind::Gt,
        Rule::Sum,
        &[TokenKind::Gt],
        Rule::Cond,
    )
}

/// Sum <- Add / Sub / Prod
pub fn sum() -> BoxedCandidate {
    select(vec![rule(Rule::Add), rule(Rule::Sub), rule(Rule::Prod)])
}

/// Add <- Prod "+" Sum
pub fn add() -> BoxedCandidate {
    binary(
        Rule::Add,
        BinOpKind::Add,
        Rule::Prod,
        &[TokenKind::Plus],
        Rule::Sum,
    )
}

/// Sub <- Prod "-" Sum
pub fn sub() -> BoxedCandidate {
    binary(
        Rule::Sub,
        BinOpKind::Sub,
        Rule::Prod,
        &[TokenKind::Minus],
        Rule::Sum,
    )
}

/// Prod <- Mul / Div / Primary
pub fn prod() -> BoxedCandidate {
    select(vec![rule(Rule::Mul), rule(Rule::Div), rule(Rule::Primary)])
}

/// Mul <- Primary "*" Prod
pub fn mul() -> BoxedCandidate {
    binary(
        Rule::Mul,
        BinOpKind::Mul,
        Rule::Primary,
        &[TokenKind::Star],
        Rule::Prod,
    )
}

/// Div <- Primary "/" Prod
pub fn div() -> BoxedCandidate {
    binary(
        Rule::Div,
        BinOpKind::Div,
        Rule::Primary,
        &[TokenKind::Slash],
        Rule::Prod,
    )
}

/// Primary <- Block / ParenExpr / int / ident
pub fn primary() -> BoxedCandidate {
    select(vec![
        rule(Rule::Block),
        rule(Rule::ParenExpr),
        rule(Rule::Integer),
        rule(Rule::Identifier),
    ])
}

/// ParenExpr <- "(" Expr ")"
pub fn paren_expr() -> BoxedCandidate {
    concat(
        nth_expr(Rule::ParenExpr, 1),
        vec![
            skip(TokenKind::LParen),
            rule(Rule::Expr),
            skip(TokenKind::RParen),
        ],
    )
}
