//! Terminal rules that turn a single token into a node

use crate::ast::{Expr, Ident, Node};
use crate::parser::combinators::BoxedCandidate;
use crate::parser::state::{ParseError, ParseState};
use crate::token::TokenKind;

/// Parse an integer literal
///
/// A literal that does not fit an `i64` is a fatal error, not a failed match.
pub fn integer() -> BoxedCandidate {
    BoxedCandidate::new(|state: &mut ParseState, position: usize| {
        let token = state.expect(position, TokenKind::Integer)?;
        let value = token
            .lexeme
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger {
                position,
                lexeme: token.lexeme.clone(),
            })?;
        Ok((position + 1, Some(Node::Expr(Expr::Int(value)))))
    })
}

/// Parse an identifier
pub fn identifier() -> BoxedCandidate {
    BoxedCandidate::new(|state: &mut ParseState, position: usize| {
        let token = state.expect(position, TokenKind::Identifier)?;
        Ok((position + 1, Some(Node::Ident(Ident::new(token.lexeme.clone())))))
    })
}
