//! Unit tests for the lexer module.

use super::lexer::tokenize;
use super::tokens::{Token, TokenKind};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.sprig".to_string())).unwrap()
}

fn lex_kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        lex_kinds("func return while break if then else end let not true false"),
        vec![
            TokenKind::Func,
            TokenKind::Return,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::End,
            TokenKind::Let,
            TokenKind::Not,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    let tokens = lex("ends iffy lettuce _func");
    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "ends");
    assert_eq!(tokens[3].value, "_func");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14");
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
}

#[test]
fn test_tokenize_string_with_escapes() {
    let tokens = lex("\"a\\nb\\t\\\"c\\\"\"");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\nb\t\"c\"");
}

#[test]
fn test_tokenize_char_with_escapes() {
    let tokens = lex("'x' '\\n' '\\\\'");
    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "\n");
    assert_eq!(tokens[2].value, "\\");
}

#[test]
fn test_compound_operators_lex_as_single_tokens() {
    assert_eq!(
        lex_kinds("== != <= >= += -= = < >"),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::Assignment,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        lex_kinds("( ) [ ] { } , . : ; + - *"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        lex_kinds("1 // the rest of this line vanishes\n2"),
        vec![TokenKind::Int, TokenKind::Int, TokenKind::EOF]
    );
}

#[test]
fn test_eof_token_is_appended() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "EOF");
}

#[test]
fn test_token_spans_track_byte_offsets() {
    let tokens = lex("let xs = 10");
    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(tokens[3].span.end.0, 11);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("let x = @".to_string(), Some("test.sprig".to_string())).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}
