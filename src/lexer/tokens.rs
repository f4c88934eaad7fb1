use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display, rc::Rc};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("do");
        set.insert("return");
        set.insert("break");
        set.insert("continue");
        set.insert("true");
        set.insert("false");
        set.insert("null");
        set
    };
}

/// The shape of a token. The parser matches operators and keywords by their
/// text, so punctuation is a single kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Keyword,
    Word,
    Number,
    Float,
    String,
    Punctuation,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

/// Shared handle to a token; AST nodes keep these for diagnostics.
pub type TokenRef = Rc<Token>;

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            _ => write!(f, "{} ({})", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn is(&self, value: &str) -> bool {
        self.value == value
    }
}
