use std::collections::HashMap;

use super::grammar::Rule;
use super::state::{ParseResult, Step};

/// Counters describing how the memo table was used during a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the table.
    pub hits: usize,
    /// Lookups that had to run the rule body.
    pub misses: usize,
    /// Outcomes currently stored.
    pub entries: usize,
}

/// Packrat memo table keyed by rule and start position.
///
/// Entries are only ever added during a parse, never replaced or evicted.
#[derive(Default)]
pub struct MemoTable {
    entries: HashMap<(Rule, usize), ParseResult<Step>>,
    hits: usize,
    misses: usize,
}

impl MemoTable {
    /// Stored outcome of `rule` at `position`. A `None` counts as a miss.
    pub fn lookup(&mut self, rule: Rule, position: usize) -> Option<ParseResult<Step>> {
        match self.entries.get(&(rule, position)) {
            Some(memo) => {
                self.hits += 1;
                Some(memo.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, rule: Rule, position: usize, result: ParseResult<Step>) {
        let previous = self.entries.insert((rule, position), result);
        debug_assert!(
            previous.is_none(),
            "{rule:?}@{position} evaluated twice. Missing memo lookup?"
        );
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
