//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;
use std::rc::Rc;

fn token(kind: TokenKind, value: &str) -> Rc<Token> {
    Rc::new(Token {
        kind,
        value: value.to_string(),
        position: Position::new(3, 7, Rc::new("test.sw".to_string())),
    })
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::new(1, 10, Rc::new("test.sw".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.get_token().is_none());
}

#[test]
fn test_error_at_token_keeps_token_and_position() {
    let offending = token(TokenKind::Word, "x");
    let error = Error::at_token(
        ErrorImpl::UselessExpression {
            token: "x".to_string(),
        },
        &offending,
    );

    assert_eq!(error.get_error_name(), "UselessExpression");
    assert!(Rc::ptr_eq(error.get_token().unwrap(), &offending));

    let position = error.get_position().unwrap();
    assert_eq!(position.line, 3);
    assert_eq!(position.column, 7);
}

#[test]
fn test_end_of_input_has_no_token() {
    let error = Error::end_of_input(None);

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedEndOfInput);
    assert!(error.get_token().is_none());
    assert!(error.get_position().is_none());
    assert_eq!(error.to_string(), "unexpected end of input");
}

#[test]
fn test_unexpected_token_tip_is_message() {
    let error = Error::at_token(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            message: "Expected ';' but found '}'.".to_string(),
        },
        &token(TokenKind::Punctuation, "}"),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected ';' but found '}'."),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_malformed_literal_error() {
    let error = Error::at_token(
        ErrorImpl::MalformedLiteral {
            token: "0xZZ".to_string(),
            message: "Invalid hexadecimal integer: '0xZZ'.".to_string(),
        },
        &token(TokenKind::Number, "0xZZ"),
    );

    assert_eq!(error.get_error_name(), "MalformedLiteral");
    assert_eq!(
        error.to_string(),
        "test.sw:3:7: malformed literal \"0xZZ\": Invalid hexadecimal integer: '0xZZ'."
    );
}

#[test]
fn test_not_yet_implemented_error() {
    let error = Error::at_token(
        ErrorImpl::NotYetImplemented {
            feature: "for loops".to_string(),
        },
        &token(TokenKind::Keyword, "for"),
    );

    assert_eq!(error.get_error_name(), "NotYetImplemented");
    assert_eq!(
        error.get_tip().to_string(),
        "for loops are recognised but not yet implemented"
    );
}

#[test]
fn test_resource_exhausted_error() {
    let error = Error::at_token(
        ErrorImpl::ResourceExhausted { depth: 128 },
        &token(TokenKind::Punctuation, "("),
    );

    assert_eq!(error.get_error_name(), "ResourceExhausted");
    assert_eq!(
        error.get_tip().to_string(),
        "Code is nested more than 128 levels deep"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
