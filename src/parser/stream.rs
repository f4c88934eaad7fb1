//! Cursor over the lexer's output.
//!
//! All lookahead is a single token. The cursor only ever moves forward, and a
//! consumed token survives only as an `Rc` held by the AST node built from it.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenRef},
    Position,
};

pub struct TokenStream {
    tokens: Vec<TokenRef>,
    pos: usize,
    /// Where the input ends, used for end-of-input diagnostics.
    end: Option<Position>,
}

impl TokenStream {
    /// Wraps a token list. Anything from the first EOF token onwards is treated
    /// as the end of the stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .iter()
            .find(|token| token.kind == TokenKind::EOF)
            .or(tokens.last())
            .map(|token| token.position.clone());

        let tokens = tokens
            .into_iter()
            .take_while(|token| token.kind != TokenKind::EOF)
            .map(Rc::new)
            .collect();

        TokenStream { tokens, pos: 0, end }
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn peek(&self) -> Option<&TokenRef> {
        self.tokens.get(self.pos)
    }

    pub fn peek_value(&self) -> Option<&str> {
        self.peek().map(|token| token.value.as_str())
    }

    pub fn is_next(&self, value: &str) -> bool {
        self.peek_value() == Some(value)
    }

    /// Consumes the next token.
    pub fn pop(&mut self) -> Result<TokenRef, Error> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(Rc::clone(token))
            }
            None => Err(self.eof()),
        }
    }

    /// Consumes the next token, which must have the text `value`.
    pub fn pop_expected(&mut self, value: &str) -> Result<TokenRef, Error> {
        match self.peek() {
            Some(token) if token.is(value) => self.pop(),
            Some(token) => Err(Error::at_token(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    message: format!("Expected '{}' but found '{}'.", value, token.value),
                },
                token,
            )),
            None => Err(self.eof()),
        }
    }

    /// Consumes the next token only if its text is `value`.
    pub fn pop_if_present(&mut self, value: &str) -> bool {
        if self.is_next(value) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn eof(&self) -> Error {
        Error::end_of_input(self.end.clone())
    }

    /// Position of the next token, or of the end of input.
    pub fn get_position(&self) -> Option<Position> {
        self.peek()
            .map(|token| token.position.clone())
            .or_else(|| self.end.clone())
    }
}
