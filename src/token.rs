//! Token model consumed by the parser
//!
//! The lexer turns its own lexemes into [`Token`]s so the parser only ever
//! deals with a closed set of [`TokenKind`]s plus the matched text.

use std::fmt;

use lachs::Span;

/// Every kind of token the grammar knows about.
///
/// Composite operators (`==`, `!=`, `<=`, `>=`) are not tokens of their own;
/// the grammar matches them as two consecutive single-character tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Integer,
    Identifier,
    If,
    Then,
    Else,
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Lt,
    Gt,
    Semicolon,
    Bang,
}

impl TokenKind {
    /// The fixed spelling of a keyword or punctuation kind.
    ///
    /// Returns `None` for kinds whose text varies (literals) or that have no
    /// text at all (end of input).
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Eof | TokenKind::Integer | TokenKind::Identifier => return None,
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Semicolon => ";",
            TokenKind::Bang => "!",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Integer => f.write_str("integer"),
            TokenKind::Identifier => f.write_str("identifier"),
            other => match other.fixed_lexeme() {
                Some(text) => write!(f, "'{text}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}

/// A single lexed token. Immutable once produced.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Token for a kind with a fixed spelling, e.g. `+` or `if`.
    pub fn fixed(kind: TokenKind, position: Span) -> Self {
        Self::new(kind, kind.fixed_lexeme().unwrap_or_default(), position)
    }

    /// The end-of-input marker. Its lexeme is always empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "", Span::default())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Integer => format!("integer '{}'", self.lexeme),
            TokenKind::Identifier => format!("identifier '{}'", self.lexeme),
            kind => kind.to_string(),
        }
    }
}
