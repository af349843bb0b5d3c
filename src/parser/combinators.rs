use std::ops::BitOr;
use std::rc::Rc;

use crate::ast::Node;
use crate::token::TokenKind;

use super::grammar::Rule;
use super::state::{ParseError, ParseResult, ParseState, Step};

/// Anything that can try to match at a position.
///
/// Candidates never move a shared cursor: they receive the start position and
/// hand back the position after the match, so a failure leaves the caller's
/// position untouched.
pub trait Candidate {
    fn parse(&self, state: &mut ParseState, position: usize) -> ParseResult<Step>;
}

impl<F: Fn(&mut ParseState, usize) -> ParseResult<Step>> Candidate for F {
    fn parse(&self, state: &mut ParseState, position: usize) -> ParseResult<Step> {
        self(state, position)
    }
}

type CandidateFn = Rc<dyn Fn(&mut ParseState, usize) -> ParseResult<Step>>;

// === Boxed candidate for type erasure ===

pub struct BoxedCandidate {
    candidate: CandidateFn,
}

impl Clone for BoxedCandidate {
    fn clone(&self) -> Self {
        BoxedCandidate {
            candidate: Rc::clone(&self.candidate),
        }
    }
}

impl BoxedCandidate {
    pub fn new<C: Candidate + 'static>(candidate: C) -> Self {
        BoxedCandidate {
            candidate: Rc::new(move |state: &mut ParseState, position: usize| {
                candidate.parse(state, position)
            }),
        }
    }
}

impl Candidate for BoxedCandidate {
    fn parse(&self, state: &mut ParseState, position: usize) -> ParseResult<Step> {
        (self.candidate)(state, position)
    }
}

/// `|` for ordered choice: A | B tries A, then B
impl BitOr<BoxedCandidate> for BoxedCandidate {
    type Output = BoxedCandidate;

    fn bitor(self, rhs: BoxedCandidate) -> Self::Output {
        select(vec![self, rhs])
    }
}

// === Primitives ===

/// Call a grammar rule through the memo table.
pub fn rule(rule: Rule) -> BoxedCandidate {
    BoxedCandidate::new(move |state: &mut ParseState, position: usize| {
        state.invoke(rule, position)
    })
}

/// Consume exactly one token of `kind`, producing no node.
pub fn skip(kind: TokenKind) -> BoxedCandidate {
    BoxedCandidate::new(move |state: &mut ParseState, position: usize| {
        state.expect(position, kind)?;
        Ok((position + 1, None))
    })
}

/// Ordered choice. The first success wins; when every alternative fails the
/// last alternative's error is reported.
pub fn select(candidates: Vec<BoxedCandidate>) -> BoxedCandidate {
    BoxedCandidate::new(move |state: &mut ParseState, position: usize| {
        let mut last = ParseError::NoAlternatives { position };
        for candidate in &candidates {
            match candidate.parse(state, position) {
                Ok(step) => return Ok(step),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => last = err,
            }
        }
        Err(last)
    })
}

/// Zero or one. Never fails on a recoverable error.
pub fn optional(candidate: BoxedCandidate) -> BoxedCandidate {
    BoxedCandidate::new(move |state: &mut ParseState, position: usize| {
        match candidate.parse(state, position) {
            Ok(step) => Ok(step),
            Err(err) if err.is_fatal() => Err(err),
            Err(_) => Ok((position, None)),
        }
    })
}

/// Sequence. Runs every candidate left to right and merges the produced nodes
/// (`None` for steps like [`skip`]) into one node.
pub fn concat<M>(merge: M, candidates: Vec<BoxedCandidate>) -> BoxedCandidate
where
    M: Fn(Vec<Option<Node>>) -> ParseResult<Node> + 'static,
{
    BoxedCandidate::new(move |state: &mut ParseState, position: usize| {
        let mut next = position;
        let mut nodes = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let (after, node) = candidate.parse(state, next)?;
            next = after;
            nodes.push(node);
        }
        Ok((next, Some(merge(nodes)?)))
    })
}

/// Zero or more. Collects every produced node and merges them into one.
pub fn repeat<M>(merge: M, candidate: BoxedCandidate) -> BoxedCandidate
where
    M: Fn(Vec<Node>) -> ParseResult<Node> + 'static,
{
    repeat_with_tail(merge, candidate, None)
}

/// Zero or more of `candidate`, then at most one `tail`.
///
/// `tail` is only attempted once `candidate` stops matching; if it matches its
/// node becomes the last element handed to `merge`.
pub fn repeat_with_tail<M>(
    merge: M,
    candidate: BoxedCandidate,
    tail: Option<BoxedCandidate>,
) -> BoxedCandidate
where
    M: Fn(Vec<Node>) -> ParseResult<Node> + 'static,
{
    BoxedCandidate::new(move |state: &mut ParseState, position: usize| {
        let mut next = position;
        let mut nodes = Vec::new();
        loop {
            match candidate.parse(state, next) {
                Ok((after, node)) => {
                    nodes.extend(node);
                    if after == next {
                        // no progress, another round would match the same way
                        break;
                    }
                    next = after;
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => {
                    if let Some(tail) = &tail {
                        match tail.parse(state, next) {
                            Ok((after, node)) => {
                                nodes.extend(node);
                                next = after;
                            }
                            Err(err) if err.is_fatal() => return Err(err),
                            Err(_) => {}
                        }
                    }
                    break;
                }
            }
        }
        Ok((next, Some(merge(nodes)?)))
    })
}
