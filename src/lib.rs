//! # packlang - packrat PEG parsing for a small expression language
//!
//! `packlang` turns source text into an abstract syntax tree using a parsing
//! expression grammar (PEG) built from a handful of composable combinators and
//! a packrat memo table.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token stream, ending in an end-of-input token
//!     ↓
//! [Cursor] → random access view, tokens fetched on demand
//!     ↓
//! [Grammar + Memo Table] → ast::Root
//! ```
//!
//! The lexer can run on its own thread ([`parse_threaded`]); the parser then
//! pulls tokens from a channel only as far as the grammar needs them.
//!
//! ## Key Design Decisions
//!
//! - **Ordered choice.** Alternatives are tried in the order they are listed and
//!   the first match wins, so the grammar is never ambiguous.
//! - **Packrat memoization.** Every rule runs at most once per start position.
//!   Backtracking stays linear in the number of tokens even though the grammar
//!   retries the same sub-rules from several alternatives.
//! - **Right-recursive operators.** Operators of the same precedence associate
//!   to the right: `1 - 2 - 3` parses as `1 - (2 - 3)`.
//! - **First failure only.** There is no error recovery. A parse either yields
//!   a full tree or the first fatal error.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization using lachs
//! - [`token`] - Token kinds consumed by the parser
//! - [`parser`] - Cursor, combinators, memo table and grammar
//! - [`ast`] - Tree produced by the parser
//! - [`fmt`] - Printing a tree back as source code
//!
//! ## Example Program
//!
//! ```text
//! main() {
//!     x = 4;
//!     if x <= 10 then x * 2 else 0
//! }
//! ```

pub mod ast;
pub mod error;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::Error;

use parser::Parser;

/// A finished parse together with the parser that ran it.
///
/// The parser keeps the fetched tokens and the memo counters, which callers
/// use to point diagnostics at source locations or to report cache activity.
/// It is `None` only when sequential lexing failed before parsing began.
pub struct Outcome {
    pub parser: Option<Parser>,
    pub result: Result<ast::Root, Error>,
}

/// Lex and parse a complete program, keeping the parser around.
///
/// With `threaded` set the lexer runs on its own thread and the parser pulls
/// tokens from a channel. When the parser runs out of tokens because lexing
/// failed, the lexer's error is reported instead of the parser's.
pub fn parse_outcome(input: &str, threaded: bool) -> Outcome {
    if !threaded {
        return match lexer::lex(input) {
            Ok(tokens) => {
                let mut parser = Parser::new(tokens.into_iter());
                let result = parser.parse().map_err(Error::from);
                Outcome {
                    parser: Some(parser),
                    result,
                }
            }
            Err(err) => Outcome {
                parser: None,
                result: Err(err.into()),
            },
        };
    }

    let (tokens, producer) = lexer::spawn(input.to_owned());
    let mut parser = Parser::new(tokens.into_iter());
    let parsed = parser.parse();

    let result = match producer.join() {
        Err(_) => Err(Error::LexerDisconnected),
        Ok(Err(err)) => Err(err.into()),
        Ok(Ok(())) => parsed.map_err(Error::from),
    };

    Outcome {
        parser: Some(parser),
        result,
    }
}

/// Lex and parse a complete program.
pub fn parse(input: &str) -> Result<ast::Root, Error> {
    parse_outcome(input, false).result
}

/// Lex on a separate thread while parsing.
pub fn parse_threaded(input: &str) -> Result<ast::Root, Error> {
    parse_outcome(input, true).result
}
