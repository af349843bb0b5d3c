//! Grammar rules of the language
//!
//! Every non-terminal is a [`Rule`]. A rule's body is built once from the
//! combinators and kept in a [`Grammar`] registry; rules refer to each other
//! only through [`rule`], so every call goes through the memo table.
//!
//! ```text
//! Root      <- Function*
//! Function  <- ident "(" ")" Block
//! Block     <- "{" Stmt2* ExprStmt? "}"
//! Stmt2     <- Semi
//! Semi      <- Expr ";"
//! ExprStmt  <- Expr
//! Expr      <- Assign / Expr2
//! Assign    <- ident "=" Expr2
//! Expr2     <- If / Cond
//! If        <- "if" Expr "then" Expr ("else" Expr)?
//! Cond      <- Eq / Neq / Lte / Gte / Lt / Gt / Sum
//! Eq        <- Sum "=" "=" Cond
//! Neq       <- Sum "!" "=" Cond
//! Lte       <- Sum "<" "=" Cond
//! Gte       <- Sum ">" "=" Cond
//! Lt        <- Sum "<" Cond
//! Gt        <- Sum ">" Cond
//! Sum       <- Add / Sub / Prod
//! Add       <- Prod "+" Sum
//! Sub       <- Prod "-" Sum
//! Prod      <- Mul / Div / Primary
//! Mul       <- Primary "*" Prod
//! Div       <- Primary "/" Prod
//! Primary   <- Block / ParenExpr / int / ident
//! ParenExpr <- "(" Expr ")"
//! ```
//!
//! Binary rules recurse on the right, so a chain of operators of the same
//! level associates to the right: `a - b - c` is `a - (b - c)`.

mod expression;
mod literal;
mod statement;

use crate::ast::{Block, Expr, Ident, Node, Root};

use super::combinators::{BoxedCandidate, repeat, rule};
use super::state::{ParseError, ParseResult};

/// Identity of a grammar rule, used as the memo key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Root,
    Function,
    Block,
    Stmt2,
    Semi,
    ExprStmt,
    Expr,
    Assign,
    Expr2,
    If,
    Cond,
    Eq,
    Neq,
    Lte,
    Gte,
    Lt,
    Gt,
    Sum,
    Add,
    Sub,
    Prod,
    Mul,
    Div,
    Primary,
    ParenExpr,
    Integer,
    Identifier,
}

impl Rule {
    /// Every rule, in declaration order.
    pub const ALL: [Rule; 27] = [
        Rule::Root,
        Rule::Function,
        Rule::Block,
        Rule::Stmt2,
        Rule::Semi,
        Rule::ExprStmt,
        Rule::Expr,
        Rule::Assign,
        Rule::Expr2,
        Rule::If,
        Rule::Cond,
        Rule::Eq,
        Rule::Neq,
        Rule::Lte,
        Rule::Gte,
        Rule::Lt,
        Rule::Gt,
        Rule::Sum,
        Rule::Add,
        Rule::Sub,
        Rule::Prod,
        Rule::Mul,
        Rule::Div,
        Rule::Primary,
        Rule::ParenExpr,
        Rule::Integer,
        Rule::Identifier,
    ];

    fn definition(self) -> BoxedCandidate {
        match self {
            Rule::Root => root(),
            Rule::Function => statement::function(),
            Rule::Block => statement::block(),
            Rule::Stmt2 => statement::stmt2(),
            Rule::Semi => statement::semi(),
            Rule::ExprStmt => statement::expr_stmt(),
            Rule::Expr => expression::expr(),
            Rule::Assign => expression::assign(),
            Rule::Expr2 => expression::expr2(),
            Rule::If => expression::if_expr(),
            Rule::Cond => expression::cond(),
            Rule::Eq => expression::eq(),
            Rule::Neq => expression::neq(),
            Rule::Lte => expression::lte(),
            Rule::Gte => expression::gte(),
            Rule::Lt => expression::lt(),
            Rule::Gt => expression::gt(),
            Rule::Sum => expression::sum(),
            Rule::Add => expression::add(),
            Rule::Sub => expression::sub(),
            Rule::Prod => expression::prod(),
            Rule::Mul => expression::mul(),
            Rule::Div => expression::div(),
            Rule::Primary => expression::primary(),
            Rule::ParenExpr => expression::paren_expr(),
            Rule::Integer => literal::integer(),
            Rule::Identifier => literal::identifier(),
        }
    }
}

/// Registry of rule bodies, indexed by [`Rule`].
pub struct Grammar {
    rules: Vec<BoxedCandidate>,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            rules: Rule::ALL.iter().map(|rule| rule.definition()).collect(),
        }
    }

    pub fn rule(&self, rule: Rule) -> BoxedCandidate {
        self.rules[rule as usize].clone()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// The nodes handed to a merger, with typed accessors.
///
/// A node of the wrong shape means the grammar and its mergers disagree, which
/// is reported as [`ParseError::Malformed`].
pub(crate) struct Parts {
    rule: Rule,
    nodes: Vec<Option<Node>>,
}

impl Parts {
    pub fn new(rule: Rule, nodes: Vec<Option<Node>>) -> Self {
        Self { rule, nodes }
    }

    fn take(&mut self, index: usize) -> Option<Node> {
        self.nodes.get_mut(index).and_then(Option::take)
    }

    fn malformed(&self, expected: &'static str) -> ParseError {
        ParseError::Malformed {
            rule: self.rule,
            expected,
        }
    }

    pub fn expr(&mut self, index: usize) -> ParseResult<Expr> {
        self.opt_expr(index)?
            .ok_or_else(|| self.malformed("an expression"))
    }

    /// An expression that may legitimately be missing, e.g. an `else` branch.
    pub fn opt_expr(&mut self, index: usize) -> ParseResult<Option<Expr>> {
        match self.take(index) {
            None => Ok(None),
            Some(node) => into_expr(node)
                .map(Some)
                .ok_or_else(|| self.malformed("an expression")),
        }
    }

    pub fn ident(&mut self, index: usize) -> ParseResult<Ident> {
        match self.take(index) {
            Some(Node::Ident(ident)) => Ok(ident),
            _ => Err(self.malformed("an identifier")),
        }
    }

    pub fn block(&mut self, index: usize) -> ParseResult<Block> {
        match self.take(index) {
            Some(Node::Block(block)) => Ok(block),
            _ => Err(self.malformed("a block")),
        }
    }
}

/// Identifiers and blocks double as expressions.
fn into_expr(node: Node) -> Option<Expr> {
    match node {
        Node::Expr(expr) => Some(expr),
        Node::Ident(ident) => Some(Expr::Ident(ident)),
        Node::Block(block) => Some(Expr::Block(block)),
        _ => None,
    }
}

/// Root <- Function*
fn root() -> BoxedCandidate {
    repeat(
        |nodes| {
            let functions = nodes
                .into_iter()
                .map(|node| match node {
                    Node::Function(function) => Ok(function),
                    _ => Err(ParseError::Malformed {
                        rule: Rule::Root,
                        expected: "a function",
                    }),
                })
                .collect::<ParseResult<Vec<_>>>()?;
            Ok(Node::Root(Root { functions }))
        },
        rule(Rule::Function),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_rules() {
        for (index, rule) in Rule::ALL.iter().enumerate() {
            assert_eq!(*rule as usize, index, "{rule:?} out of place");
        }
    }

    #[test]
    fn test_parts_converts_idents_to_exprs() {
        let mut parts = Parts::new(
            Rule::Assign,
            vec![Some(Node::Ident(Ident::new("x"))), None],
        );
        assert_eq!(parts.expr(0).ok(), Some(Expr::ident("x")));
        assert!(matches!(
            parts.expr(0),
            Err(ParseError::Malformed {
                rule: Rule::Assign,
                ..
            })
        ));
        assert!(matches!(parts.opt_expr(1), Ok(None)));
    }
}
