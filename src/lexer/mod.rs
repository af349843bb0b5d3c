//! Token production
//!
//! Lexing is done by a `lachs` generated lexer. Its lexemes are converted into
//! [`Token`]s and terminated with a single end-of-input token, which is what the
//! parser's cursor expects from any token source.

mod lexeme;

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::token::Token;

use lexeme::Lexeme;

#[derive(Debug, Clone, Error)]
#[error("lexing failed: {message}")]
pub struct LexError {
    pub message: String,
}

/// Lex the whole input. The returned tokens always end with exactly one
/// [`TokenKind::Eof`](crate::token::TokenKind::Eof) token.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let lexemes = Lexeme::lex(input).map_err(|err| LexError {
        message: err.to_string(),
    })?;

    let mut tokens: Vec<Token> = lexemes.into_iter().map(Token::from).collect();
    tokens.push(Token::eof());

    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Lex on a separate thread and hand the tokens over a channel.
///
/// `lachs` lexes a whole input in one call, so the tokens are sent as one batch
/// once lexing is done. The receiving parser still pulls them one at a time and
/// only as far as the grammar needs.
///
/// When lexing fails nothing is sent: the channel closes without an
/// end-of-input token and the error is returned from the join handle.
pub fn spawn(input: String) -> (Receiver<Token>, JoinHandle<Result<(), LexError>>) {
    let (sender, receiver) = mpsc::channel();

    let producer = thread::spawn(move || {
        for token in lex(&input)? {
            if sender.send(token).is_err() {
                log::debug!("token consumer hung up, stopping producer");
                break;
            }
        }
        Ok(())
    });

    (receiver, producer)
}
