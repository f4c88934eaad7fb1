//! Parser state and the top-level entry points.
//!
//! The `Parser` owns the token stream for exactly one parse and tracks how
//! deeply the grammar has recursed, so pathologically nested input fails with
//! an error instead of overflowing the stack.

use tracing::debug;

use crate::{
    ast::ast::Executable,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position,
};

use super::{stmt::parse_executable, stream::TokenStream};

/// Default nesting limit for expressions and code blocks.
pub const DEFAULT_MAX_DEPTH: usize = 128;

// One nesting level runs through every precedence level of the cascade, which
// takes tens of KiB of stack in debug builds.
const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_SEGMENT_SIZE: usize = 1024 * 1024;

/// Tunables for a single parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Deepest nesting of parenthesised expressions, prefix operators and
    /// code blocks accepted before failing with `ResourceExhausted`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens being parsed
    pub tokens: TokenStream,
    config: ParserConfig,
    /// Current nesting depth
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Parser {
            tokens: TokenStream::new(tokens),
            config,
            depth: 0,
        }
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// # Returns
    ///
    /// Whatever `parse_fn` returns, or a `ResourceExhausted` error pointing at
    /// the next token when the configured depth would be exceeded.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth {
            let error_impl = ErrorImpl::ResourceExhausted {
                depth: self.config.max_depth,
            };
            return Err(match self.tokens.peek() {
                Some(token) => Error::at_token(error_impl, token),
                None => Error::new(
                    error_impl,
                    self.tokens.get_position().unwrap_or_else(Position::null),
                ),
            });
        }

        self.depth += 1;
        // Grow the stack on the heap when less than the red zone remains, so
        // the depth limit is what stops deep input even on small thread stacks.
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || parse_fn(self));
        self.depth -= 1;
        result
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}

/// Parses a whole token stream with the default configuration.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by the lexer, optionally EOF-terminated
///
/// # Returns
///
/// Every top-level executable in source order, or the first error found.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Executable>, Error> {
    parse_with_config(tokens, ParserConfig::default())
}

pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> Result<Vec<Executable>, Error> {
    let mut parser = Parser::new(tokens, config);
    parse_code(&mut parser)
}

/// Parses executables until the stream is exhausted.
pub fn parse_code(parser: &mut Parser) -> Result<Vec<Executable>, Error> {
    let mut executables = vec![];

    while parser.tokens.has_more() {
        let executable = parse_executable(parser, true, true)?;
        executables.push(executable);
    }

    debug!(count = executables.len(), "parsed executables");
    Ok(executables)
}
