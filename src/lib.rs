#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A 1-based line/column location inside a named source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders an error against the source it was raised for.
///
/// ```text
/// Error: UnexpectedToken (Expected ';' but found 'y'.)
/// -> main.sw:20:9
///    |
/// 20 | let a = #;
///    | --------^
/// ```
///
/// End-of-input errors that carry no position only get the header line.
pub fn format_error(error: &Error, source: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some(position) = error.get_position() else {
        return output;
    };

    output.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return output;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
