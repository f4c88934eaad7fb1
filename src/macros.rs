//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched text as one token
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), lexer.position());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for patterns whose whole match is one token.
///
/// The generated handler pushes a token of the given kind holding the matched
/// text, then advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+\\.[0-9]+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Float),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let position = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from(matched), position));
            lexer.advance_n(matched);
            Ok(())
        }
    };
}
