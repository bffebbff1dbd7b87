#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
///
/// Offsets are `u32`, sources past 4 GiB report `u32::MAX` for every
/// position beyond that point.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` inside that line. A position at the very end of the source
/// maps to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input, after the last character
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => Some((line_number - 1, line.to_string(), line.len())),
        _ => Some((line_number, String::new(), 0)),
    }
}


/// A diagnostic paired with the source it was found in, displayed as a caret report:
///
/// ```text
/// Error: message (tip)
/// -> file.mk
///   |
/// 2 | let b 5;
///   | ------^
/// ```
pub struct ErrorReport<'a> {
    error: &'a Error,
    source: &'a str,
}

impl<'a> ErrorReport<'a> {
    pub fn new(error: &'a Error, source: &'a str) -> Self {
        ErrorReport { error, source }
    }
}

impl Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.error.get_position();

        if let ErrorTip::None = self.error.get_tip() {
            writeln!(f, "Error: {}", self.error)?;
        } else {
            writeln!(f, "Error: {} ({})", self.error, self.error.get_tip())?;
        }
        writeln!(f, "-> {}", position.1)?;

        let Some((line, line_text, line_pos)) = get_line_at_position(self.source, position.0)
        else {
            return Ok(());
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;
        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

/// Renders `error` against `source`, see [`ErrorReport`].
pub fn format_error(error: &Error, source: &str) -> String {
    ErrorReport::new(error, source).to_string()
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches(|c: char| c == ' ' || c == '\t').len();

    (String::from(&string[start..]), start)
}
