//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and words
//! - Numeric literals (integers, hexadecimal and floats)
//! - String literals, which keep their quotes and escapes
//! - Operators and punctuation
//! - Comments and line/column tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn lex(source: &str) -> Vec<super::tokens::Token> {
    tokenize(source.to_string(), Some("test.sw".to_string())).unwrap()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex("if else while for do return break continue true false null");

    for (token, expected) in tokens.iter().zip([
        "if", "else", "while", "for", "do", "return", "break", "continue", "true", "false", "null",
    ]) {
        assert_eq!(token.kind, TokenKind::Keyword);
        assert_eq!(token.value, expected);
    }
    assert_eq!(tokens[11].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 12);
}

#[test]
fn test_tokenize_words() {
    let tokens = lex("foo baz_123 _underscore CamelCase iffy");

    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Word));
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[4].value, "iffy");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 0 0x1F 0xZZ");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "0x1F");
    // Malformed hex still lexes as one number; the parser rejects it.
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "0xZZ");
}

#[test]
fn test_tokenize_strings_keep_raw_text() {
    let tokens = lex(r#""hello" 'single' "tab\there" "quote\"d""#);

    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::String));
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].value, "'single'");
    assert_eq!(tokens[2].value, r#""tab\there""#);
    assert_eq!(tokens[3].value, r#""quote\"d""#);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators_longest_match() {
    let tokens = lex("?? && || << >> <= >= == != ++ -- += -= *= /= %= &= |= ^=");
    let values = tokens[..19].iter().map(|t| t.value.as_str()).collect::<Vec<_>>();

    assert_eq!(
        values,
        vec![
            "??", "&&", "||", "<<", ">>", "<=", ">=", "==", "!=", "++", "--", "+=", "-=", "*=",
            "/=", "%=", "&=", "|=", "^="
        ]
    );
    assert!(tokens[..19].iter().all(|t| t.kind == TokenKind::Punctuation));
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = lex("( ) { } [ ] . , ; : ? ~ ! + - * / % & | ^ < > =");

    assert_eq!(tokens.len(), 25);
    assert!(tokens[..24].iter().all(|t| t.kind == TokenKind::Punctuation));
    assert_eq!(tokens[6].value, ".");
    assert_eq!(tokens[23].value, "=");
}

#[test]
fn test_tokenize_comments_and_positions() {
    let tokens = lex("x = 1; // set x\n  y = x;");

    assert_eq!(tokens[0].value, "x");
    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
    assert_eq!((tokens[2].position.line, tokens[2].position.column), (1, 5));
    assert_eq!(tokens[4].value, "y");
    assert_eq!((tokens[4].position.line, tokens[4].position.column), (2, 3));
    assert_eq!(tokens[4].position.file.as_str(), "test.sw");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("x = #;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().unwrap().column, 5);
    assert_eq!(error.get_position().unwrap().file.as_str(), "shell");
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("x = \"oops;\ny = 1;".to_string(), None).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnterminatedString { token } if token == "\"oops;"));
}
