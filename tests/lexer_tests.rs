use packlang::lexer::lex;
use packlang::token::TokenKind;

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input)
        .expect("lexing failed")
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn lex_empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::Eof]);
}

#[test]
fn lex_keywords() {
    assert_eq!(
        kinds("if then else"),
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lex_identifiers_and_integers() {
    let tokens = lex("main x_1 42").expect("lexing failed");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "main");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "x_1");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].lexeme, "42");
    assert!(tokens[3].is_eof());
}

#[test]
fn lex_keyword_prefix_is_identifier() {
    let tokens = lex("iffy").expect("lexing failed");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "iffy");
}

#[test]
fn lex_punctuation() {
    assert_eq!(
        kinds("+ - * / = ( ) { } ;"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assign,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lex_comparisons_as_single_characters() {
    assert_eq!(
        kinds("<= >= == !="),
        vec![
            TokenKind::Lt,
            TokenKind::Assign,
            TokenKind::Gt,
            TokenKind::Assign,
            TokenKind::Assign,
            TokenKind::Assign,
            TokenKind::Bang,
            TokenKind::Assign,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lex_fixed_tokens_keep_their_spelling() {
    let tokens = lex("if <").expect("lexing failed");
    assert_eq!(tokens[0].lexeme, "if");
    assert_eq!(tokens[1].lexeme, "<");
    assert_eq!(tokens[2].lexeme, "");
}

#[test]
fn lex_ends_with_single_eof() {
    let tokens = lex("main() { 1 }").expect("lexing failed");
    let eofs = tokens.iter().filter(|token| token.is_eof()).count();
    assert_eq!(eofs, 1);
    assert!(tokens.last().is_some_and(|token| token.is_eof()));
}

#[test]
fn lex_spawn_delivers_every_token() {
    let (receiver, producer) = packlang::lexer::spawn("main() { 1 + 2 }".to_owned());
    let received: Vec<TokenKind> = receiver.iter().map(|token| token.kind).collect();

    assert!(producer.join().expect("lexer thread panicked").is_ok());
    assert_eq!(received, kinds("main() { 1 + 2 }"));
}

#[test]
fn lex_spawn_sends_nothing_on_error() {
    let (receiver, producer) = packlang::lexer::spawn("main() { @ }".to_owned());
    let received: Vec<TokenKind> = receiver.iter().map(|token| token.kind).collect();

    assert!(received.is_empty());
    assert!(producer.join().expect("lexer thread panicked").is_err());
}

#[test]
fn lex_reports_crate_error() {
    let err: packlang::lexer::LexError = match lex("main() { @ }") {
        Ok(tokens) => panic!("expected a lex error, got {} tokens", tokens.len()),
        Err(err) => err,
    };
    assert!(err.to_string().starts_with("lexing failed"));
}
