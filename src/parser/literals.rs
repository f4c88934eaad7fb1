//! Decoding of numeric and string literal tokens.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenRef,
};

fn malformed(token: &TokenRef, message: String) -> Error {
    Error::at_token(
        ErrorImpl::MalformedLiteral {
            token: token.value.clone(),
            message,
        },
        token,
    )
}

/// Parses a NUMBER token. `0x`/`0X` prefixed values are hexadecimal.
pub fn parse_integer_literal(token: &TokenRef) -> Result<i64, Error> {
    let value = token.value.as_str();

    if let Some(digits) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        i64::from_str_radix(digits, 16).map_err(|_| {
            malformed(token, format!("Invalid expression (presumed to be a hexadecimal integer): '{}'.", value))
        })
    } else {
        value.parse::<i64>().map_err(|_| {
            malformed(token, format!("Invalid expression (presumed to be a decimal integer): '{}'.", value))
        })
    }
}

pub fn parse_float_literal(token: &TokenRef) -> Result<f64, Error> {
    token.value.parse::<f64>().map_err(|_| {
        malformed(token, format!("Invalid expression (presumed to be a float): '{}'.", token.value))
    })
}

/// Strips the quotes from a STRING token and resolves its escape sequences.
pub fn string_literal_to_value(token: &TokenRef) -> Result<String, Error> {
    let raw = token.value.as_str();
    let quote = raw.chars().next();

    let inner = match quote {
        Some(q @ ('"' | '\'')) if raw.len() >= 2 && raw.ends_with(q) => &raw[1..raw.len() - 1],
        _ => return Err(malformed(token, format!("String literal is not quoted: {}", raw))),
    };

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some(other) => {
                return Err(malformed(token, format!("Unrecognized escape sequence: '\\{}'.", other)))
            }
            None => return Err(malformed(token, String::from("String literal ends with a backslash."))),
        }
    }

    Ok(result)
}
