use crate::token::Token;

/// Random access view over a lazily produced token sequence.
///
/// Tokens are pulled from the source only as far as a lookup needs and are
/// never discarded, so the parser can backtrack to any earlier position.
pub struct Cursor {
    source: Box<dyn Iterator<Item = Token>>,
    tokens: Vec<Token>,
    at_eof: bool,
    exhausted: bool,
}

impl Cursor {
    pub fn new(source: impl Iterator<Item = Token> + 'static) -> Self {
        Self {
            source: Box::new(source),
            tokens: Vec::new(),
            at_eof: false,
            exhausted: false,
        }
    }

    /// Pull one token from the source. Returns whether the buffer grew.
    fn fetch(&mut self) -> bool {
        if self.at_eof || self.exhausted {
            return false;
        }

        match self.source.next() {
            Some(token) => {
                log::trace!("fetched {} at {}", token.describe(), self.tokens.len());
                self.at_eof = token.is_eof();
                self.tokens.push(token);
                true
            }
            None => {
                log::debug!("token source ended without end of input");
                self.exhausted = true;
                false
            }
        }
    }

    /// The token at `position`.
    ///
    /// Every position at or past the end-of-input token yields that token.
    /// `None` means the source ran dry before `position` without ever
    /// producing end of input.
    pub fn look(&mut self, position: usize) -> Option<&Token> {
        while position >= self.tokens.len() && self.fetch() {}

        if self.at_eof {
            let last = self.tokens.len().saturating_sub(1);
            self.tokens.get(position.min(last))
        } else {
            self.tokens.get(position)
        }
    }

    /// Pull one more token unless the source is known to be finished, then
    /// report whether end of input has been reached.
    pub fn is_complete(&mut self) -> bool {
        self.fetch();
        self.at_eof
    }

    /// A token that has already been fetched. Never pulls from the source.
    pub fn fetched(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Number of tokens buffered so far.
    pub fn buffered(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use lachs::Span;

    use super::*;
    use crate::token::TokenKind;

    fn int(text: &str) -> Token {
        Token::new(TokenKind::Integer, text, Span::default())
    }

    fn counting(tokens: Vec<Token>) -> (Cursor, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let source = tokens.into_iter().inspect(move |_| counter.set(counter.get() + 1));
        (Cursor::new(source), pulled)
    }

    #[test]
    fn test_look_pulls_only_what_is_needed() {
        let (mut cursor, pulled) = counting(vec![int("1"), int("2"), int("3"), Token::eof()]);

        assert_eq!(cursor.look(1).map(|t| t.lexeme.as_str()), Some("2"));
        assert_eq!(pulled.get(), 2);
        assert_eq!(cursor.buffered(), 2);
    }

    #[test]
    fn test_look_is_idempotent() {
        let (mut cursor, pulled) = counting(vec![int("1"), int("2"), Token::eof()]);

        cursor.look(1);
        let before = (cursor.buffered(), pulled.get());
        cursor.look(1);
        cursor.look(0);
        assert_eq!((cursor.buffered(), pulled.get()), before);
    }

    #[test]
    fn test_positions_past_eof_yield_eof() {
        let mut cursor = Cursor::new(vec![int("7"), Token::eof()].into_iter());

        assert!(cursor.look(1).is_some_and(Token::is_eof));
        assert!(cursor.look(10).is_some_and(Token::is_eof));
        assert_eq!(cursor.buffered(), 2);
    }

    #[test]
    fn test_exhausted_source_without_eof() {
        let mut cursor = Cursor::new(vec![int("7")].into_iter());

        assert!(cursor.look(0).is_some());
        assert!(cursor.look(1).is_none());
        assert!(!cursor.is_complete());
    }

    #[test]
    fn test_is_complete_pulls_one_more() {
        let (mut cursor, pulled) = counting(vec![int("1"), Token::eof()]);

        assert!(!cursor.is_complete());
        assert_eq!(pulled.get(), 1);
        assert!(cursor.is_complete());
        assert_eq!(pulled.get(), 2);
        assert!(cursor.is_complete());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_fetched_never_pulls() {
        let (cursor, pulled) = counting(vec![int("1"), Token::eof()]);

        assert!(cursor.fetched(0).is_none());
        assert_eq!(pulled.get(), 0);
    }
}
