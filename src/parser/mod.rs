mod combinators;
mod cursor;
mod grammar;
mod memo;
mod state;

pub use combinators::{
    BoxedCandidate, Candidate, concat, optional, repeat, repeat_with_tail, rule, select, skip,
};
pub use cursor::Cursor;
pub use grammar::{Grammar, Rule};
pub use memo::MemoStats;
pub use state::{ParseError, ParseResult, ParseState, Step};

use crate::ast::{Node, Root};
use crate::token::Token;

/// Packrat parser over a lazily produced token sequence.
///
/// One parser instance parses one program; its cursor and memo table are not
/// shared with anything else.
pub struct Parser {
    state: ParseState,
}

impl Parser {
    pub fn new(source: impl Iterator<Item = Token> + 'static) -> Self {
        Self {
            state: ParseState::new(Cursor::new(source)),
        }
    }

    /// Parse a whole program.
    ///
    /// Fails if no program matches or if anything but end of input follows
    /// the last function.
    pub fn parse(&mut self) -> ParseResult<Root> {
        let (end, node) = self.state.invoke(Rule::Root, 0)?;
        let root = match node {
            Some(Node::Root(root)) => root,
            _ => {
                return Err(ParseError::Malformed {
                    rule: Rule::Root,
                    expected: "a root",
                });
            }
        };

        let next = self.state.look(end)?;
        if !next.is_eof() {
            return Err(ParseError::NotFullyConsumed {
                position: end,
                found: next.describe(),
            });
        }
        if !self.state.is_complete() {
            return Err(ParseError::TruncatedInput { position: end });
        }

        let stats = self.state.stats();
        log::debug!(
            "parsed {} functions from {} tokens ({} memo hits, {} misses)",
            root.functions.len(),
            end + 1,
            stats.hits,
            stats.misses
        );
        Ok(root)
    }

    pub fn stats(&self) -> MemoStats {
        self.state.stats()
    }

    /// A token the parser has already pulled from its source.
    pub fn token_at(&self, position: usize) -> Option<&Token> {
        self.state.fetched(position)
    }
}
