//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a stream
//! of tokens into a list of executables. Expressions are parsed by a cascade
//! of precedence levels, tightest first:
//!
//! unary → multiplicative → additive → shift → relational → equality →
//! bitwise → logical → null-coalescing → ternary
//!
//! Every binary level is the same left-associative op-chain algorithm
//! instantiated with its own operator set. The grammar is LL(1) and never
//! backtracks; the first error aborts the parse.

pub mod expr;
pub mod literals;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;

#[cfg(test)]
mod property_tests;
