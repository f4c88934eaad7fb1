//! Lexical analysis module.
//!
//! This module contains the reference lexer that converts Sideways source
//! text into the token stream consumed by the parser. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Recognition of keywords, words, numbers, floats, strings and punctuation
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//!
//! String tokens keep their quotes and escape sequences; decoding them is the
//! parser's job.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
