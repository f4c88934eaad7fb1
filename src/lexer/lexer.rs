use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Patterns are tried in order and every regex is anchored, so earlier entries
// win: comments before `/`, floats before integers, two-character operators
// before their one-character prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+\.[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Float) },
        RegexPattern { regex: Regex::new(r"^0[xX][0-9a-zA-Z_]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new(r#"^"(?:[^"\\\n]|\\.)*""#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new(r"^'(?:[^'\\\n]|\\.)*'").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new(r#"^["'][^\n]*"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern {
            regex: Regex::new(r"^(?:\?\?|&&|\|\||<<|>>|<=|>=|==|!=|\+\+|--|\+=|-=|\*=|/=|%=|&=|\|=|\^=|[-+*/%&|^~!<>=?:;,.()\[\]{}])").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation),
        },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    /// Moves past `matched`, keeping line and column in step with it.
    pub fn advance_n(&mut self, matched: &str) {
        for c in matched.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += matched.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched);
    Ok(())
}

fn word_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = if RESERVED_LOOKUP.contains(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Word
    };

    let position = lexer.position();
    lexer.push(MK_TOKEN!(kind, String::from(matched), position));
    lexer.advance_n(matched);
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    Err(Error::new(
        ErrorImpl::UnterminatedString { token: String::from(matched) },
        lexer.position(),
    ))
}

/// Splits `source` into tokens, always terminated by a single EOF token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .map(|matched| (pattern.handler, matched.as_str().to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched)?,
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                trace!(token = %token, "no lexer pattern matched");
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
            }
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
    debug!(count = lex.tokens.len(), file = %lex.file, "tokenized source");
    Ok(lex.tokens)
}
