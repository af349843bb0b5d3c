//! Function definitions, blocks and statements

use crate::ast::{Block, Function, Node, Stmt};
use crate::parser::combinators::{BoxedCandidate, concat, repeat_with_tail, rule, select, skip};
use crate::parser::state::ParseError;
use crate::token::TokenKind;

use super::{Parts, Rule};

/// Function <- ident "(" ")" Block
pub fn function() -> BoxedCandidate {
    concat(
        |nodes| {
            let mut parts = Parts::new(Rule::Function, nodes);
            Ok(Node::Function(Function {
                name: parts.ident(0)?,
                body: parts.block(3)?,
            }))
        },
        vec![
            rule(Rule::Identifier),
            skip(TokenKind::LParen),
            skip(TokenKind::RParen),
            rule(Rule::Block),
        ],
    )
}

/// Block <- "{" Stmt2* ExprStmt? "}"
///
/// Every statement but the last needs its `;`; a last expression without one
/// becomes the block's tail.
pub fn block() -> BoxedCandidate {
    let body = repeat_with_tail(
        |nodes| {
            let mut stmts = Vec::with_capacity(nodes.len());
            let mut tail = None;
            for node in nodes {
                match node {
                    Node::Stmt(Stmt::Expr(expr)) => tail = Some(expr),
                    Node::Stmt(stmt) => stmts.push(stmt),
                    _ => {
                        return Err(ParseError::Malformed {
                            rule: Rule::Block,
                            expected: "a statement",
                        });
                    }
                }
            }
            Ok(Node::Block(Block::new(stmts, tail)))
        },
        rule(Rule::Stmt2),
        Some(rule(Rule::ExprStmt)),
    );

    concat(
        |nodes| Parts::new(Rule::Block, nodes).block(1).map(Node::Block),
        vec![skip(TokenKind::LBrace), body, skip(TokenKind::RBrace)],
    )
}

/// Stmt2 <- Semi
pub fn stmt2() -> BoxedCandidate {
    select(vec![rule(Rule::Semi)])
}

/// Semi <- Expr ";"
pub fn semi() -> BoxedCandidate {
    concat(
        |nodes| {
            let expr = Parts::new(Rule::Semi, nodes).expr(0)?;
            Ok(Node::Stmt(Stmt::Semi(expr)))
        },
        vec![rule(Rule::Expr), skip(TokenKind::Semicolon)],
    )
}

/// ExprStmt <- Expr
pub fn expr_stmt() -> BoxedCandidate {
    concat(
        |nodes| {
            let expr = Parts::new(Rule::ExprStmt, nodes).expr(0)?;
            Ok(Node::Stmt(Stmt::Expr(expr)))
        },
        vec![rule(Rule::Expr)],
    )
}
