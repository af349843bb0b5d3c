use thiserror::Error;

use crate::ast::Node;
use crate::token::{Token, TokenKind};

use super::combinators::Candidate;
use super::cursor::Cursor;
use super::grammar::{Grammar, Rule};
use super::memo::{MemoStats, MemoTable};

#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at token {position}")]
    UnexpectedToken {
        position: usize,
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("no alternative matched at token {position}")]
    NoAlternatives { position: usize },

    #[error("input not fully consumed: unexpected {found} at token {position}")]
    NotFullyConsumed { position: usize, found: String },

    #[error("token source ended before end of input at token {position}")]
    TruncatedInput { position: usize },

    #[error("integer literal '{lexeme}' at token {position} does not fit in 64 bits")]
    InvalidInteger { position: usize, lexeme: String },

    #[error("rule {rule:?} expected {expected} from its sub-rules")]
    Malformed { rule: Rule, expected: &'static str },
}

impl ParseError {
    /// Fatal errors end the parse; everything else is a local failure that
    /// ordered choice, optionals and repetition may recover from.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ParseError::UnexpectedToken { .. } | ParseError::NoAlternatives { .. }
        )
    }

    /// Token index the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::NoAlternatives { position }
            | ParseError::NotFullyConsumed { position, .. }
            | ParseError::TruncatedInput { position }
            | ParseError::InvalidInteger { position, .. } => Some(*position),
            ParseError::Malformed { .. } => None,
        }
    }
}

/// Stack that must remain before a rule body runs without growing first.
const RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

pub type ParseResult<T> = Result<T, ParseError>;

/// Outcome of a successful parse step: where the next step starts and the node
/// produced, if any.
pub type Step = (usize, Option<Node>);

/// The only mutable state of a parse: the token cursor and the memo table.
/// Grammar rules are looked up from a registry built once per state.
pub struct ParseState {
    cursor: Cursor,
    memo: MemoTable,
    grammar: Grammar,
}

impl ParseState {
    pub fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            memo: MemoTable::default(),
            grammar: Grammar::new(),
        }
    }

    pub fn look(&mut self, position: usize) -> ParseResult<&Token> {
        self.cursor
            .look(position)
            .ok_or(ParseError::TruncatedInput { position })
    }

    /// The token at `position`, provided it has the given kind.
    pub fn expect(&mut self, position: usize, kind: TokenKind) -> ParseResult<&Token> {
        let token = self.look(position)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::UnexpectedToken {
                position,
                expected: kind,
                found: token.kind,
            })
        }
    }

    pub fn is_complete(&mut self) -> bool {
        self.cursor.is_complete()
    }

    pub fn fetched(&self, position: usize) -> Option<&Token> {
        self.cursor.fetched(position)
    }

    /// Run `rule` at `position` through the memo table.
    ///
    /// A rule body runs at most once per position; later calls replay the
    /// stored outcome. Replaying is cheap since AST children are shared, not
    /// copied. Fatal errors are not stored since they end the parse.
    pub fn invoke(&mut self, rule: Rule, position: usize) -> ParseResult<Step> {
        if let Some(memo) = self.memo.lookup(rule, position) {
            log::trace!("memo hit {rule:?}@{position}");
            return memo;
        }

        log::trace!("memo miss {rule:?}@{position}");
        let body = self.grammar.rule(rule);
        // every nesting level re-enters here, so deep input grows the stack on the heap
        let result = stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || body.parse(self, position));

        match &result {
            Err(err) if err.is_fatal() => {}
            _ => self.memo.insert(rule, position, result.clone()),
        }

        result
    }

    pub fn stats(&self) -> MemoStats {
        self.memo.stats()
    }
}
