//! Error types and error handling for the front end.
//!
//! This module defines the single error type raised while tokenizing and
//! parsing. It includes:
//!
//! - An error structure carrying the offending token and its position
//! - One variant per failure kind, from grammar violations to nesting limits
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
