//! The `lachs` generated lexer
//!
//! Kept in its own module since `#[lachs::token]` declares its own error type
//! next to the enum.

use lachs::Span;

use crate::token::{Token, TokenKind};

#[lachs::token]
pub enum Lexeme {
    #[terminal("if")]
    If,
    #[terminal("then")]
    Then,
    #[terminal("else")]
    Else,
    #[literal("[0-9]+")]
    Integer,
    #[literal("[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("=")]
    Assign,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal("{")]
    LBrace,
    #[terminal("}")]
    RBrace,
    #[terminal("<")]
    LessThan,
    #[terminal(">")]
    GreaterThan,
    #[terminal(";")]
    Semicolon,
    #[terminal("!")]
    Bang,
}

impl Lexeme {
    pub fn pos(&self) -> Span {
        match self {
            Lexeme::If(inner) => inner.position.clone(),
            Lexeme::Then(inner) => inner.position.clone(),
            Lexeme::Else(inner) => inner.position.clone(),
            Lexeme::Integer(inner) => inner.position.clone(),
            Lexeme::Ident(inner) => inner.position.clone(),
            Lexeme::Plus(inner) => inner.position.clone(),
            Lexeme::Minus(inner) => inner.position.clone(),
            Lexeme::Star(inner) => inner.position.clone(),
            Lexeme::Slash(inner) => inner.position.clone(),
            Lexeme::Assign(inner) => inner.position.clone(),
            Lexeme::LParen(inner) => inner.position.clone(),
            Lexeme::RParen(inner) => inner.position.clone(),
            Lexeme::LBrace(inner) => inner.position.clone(),
            Lexeme::RBrace(inner) => inner.position.clone(),
            Lexeme::LessThan(inner) => inner.position.clone(),
            Lexeme::GreaterThan(inner) => inner.position.clone(),
            Lexeme::Semicolon(inner) => inner.position.clone(),
            Lexeme::Bang(inner) => inner.position.clone(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Lexeme::If(_) => TokenKind::If,
            Lexeme::Then(_) => TokenKind::Then,
            Lexeme::Else(_) => TokenKind::Else,
            Lexeme::Integer(_) => TokenKind::Integer,
            Lexeme::Ident(_) => TokenKind::Identifier,
            Lexeme::Plus(_) => TokenKind::Plus,
            Lexeme::Minus(_) => TokenKind::Minus,
            Lexeme::Star(_) => TokenKind::Star,
            Lexeme::Slash(_) => TokenKind::Slash,
            Lexeme::Assign(_) => TokenKind::Assign,
            Lexeme::LParen(_) => TokenKind::LParen,
            Lexeme::RParen(_) => TokenKind::RParen,
            Lexeme::LBrace(_) => TokenKind::LBrace,
            Lexeme::RBrace(_) => TokenKind::RBrace,
            Lexeme::LessThan(_) => TokenKind::Lt,
            Lexeme::GreaterThan(_) => TokenKind::Gt,
            Lexeme::Semicolon(_) => TokenKind::Semicolon,
            Lexeme::Bang(_) => TokenKind::Bang,
        }
    }
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        let kind = lexeme.kind();
        let position = lexeme.pos();
        match lexeme {
            Lexeme::Integer(inner) => Token::new(kind, inner.value, position),
            Lexeme::Ident(inner) => Token::new(kind, inner.value, position),
            _ => Token::fixed(kind, position),
        }
    }
}
