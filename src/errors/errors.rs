use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
    token: Option<Rc<Token>>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
            token: None,
        }
    }

    /// Creates an error pointing at the token that caused it.
    pub fn at_token(error_impl: ErrorImpl, token: &Rc<Token>) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(token.position.clone()),
            token: Some(Rc::clone(token)),
        }
    }

    /// Creates an error for a token stream that ran out mid-construct.
    ///
    /// There is no offending token; `position` is where the input ended, when known.
    pub fn end_of_input(position: Option<Position>) -> Self {
        Error {
            internal_error: ErrorImpl::UnexpectedEndOfInput,
            position,
            token: None,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_token(&self) -> Option<&Rc<Token>> {
        self.token.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::UselessExpression { .. } => "UselessExpression",
            ErrorImpl::NotYetImplemented { .. } => "NotYetImplemented",
            ErrorImpl::ResourceExhausted { .. } => "ResourceExhausted",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "String literal is missing its closing quote",
            )),
            ErrorImpl::UnexpectedToken { message, .. } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The file ended in the middle of a statement",
            )),
            ErrorImpl::MalformedLiteral { message, .. } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UselessExpression { .. } => ErrorTip::Suggestion(String::from(
                "This expression does nothing. Did you forget an assignment?",
            )),
            ErrorImpl::NotYetImplemented { feature } => ErrorTip::Suggestion(format!(
                "{} are recognised but not yet implemented",
                feature
            )),
            ErrorImpl::ResourceExhausted { depth } => ErrorTip::Suggestion(format!(
                "Code is nested more than {} levels deep",
                depth
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{}: {}", position, self.internal_error),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal: {token:?}")]
    UnterminatedString { token: String },
    #[error("unexpected token {token:?}: {message}")]
    UnexpectedToken { token: String, message: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("malformed literal {token:?}: {message}")]
    MalformedLiteral { token: String, message: String },
    #[error("expression {token:?} does nothing")]
    UselessExpression { token: String },
    #[error("{feature} are not yet implemented")]
    NotYetImplemented { feature: String },
    #[error("nesting depth exceeded the limit of {depth}")]
    ResourceExhausted { depth: usize },
}
