use thiserror::Error;

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Anything that can go wrong between source text and a finished AST.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("lexer thread panicked")]
    LexerDisconnected,
}
