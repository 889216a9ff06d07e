#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source file. Lines and columns are 1-based, the offset is
/// a byte offset into the source.
#[derive(Debug, Clone)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `self` up to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Tokenizes and parses a whole source file.
pub fn parse_source(source: &str, file: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse(tokens, Rc::new(file.to_string()))
}

/// Finds the line containing the byte `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at the very end of the source
/// (where EOF lives) maps onto the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // EOF: point just past the last character of the last line
    let last = content.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') || content.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = std::fs::read_to_string("tests/test_file.txt").unwrap();

        let (line_number, line, line_pos) = super::get_line_at_position(&content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(&content, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("int x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "int x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("int x", 6).is_none());
    }

    #[test]
    fn test_render_error_counts_characters() {
        let source = "c = 'é' @;";
        let error = super::parse_source(source, "utf8.c").unwrap_err();
        let rendered = super::render_error(&error, source);

        assert!(rendered.contains("-> utf8.c:1:9"));
        assert!(rendered.ends_with("| --------^"));
    }

    #[test]
    fn test_render_error_points_at_token() {
        let source = "int x = 1;\nx = = 2;\n";
        let error = super::parse_source(source, "render.c").unwrap_err();
        let rendered = super::render_error(&error, source);

        assert!(rendered.starts_with("Error: SyntaxError"));
        assert!(rendered.contains("-> render.c:2:5"));
        assert!(rendered.contains("2 | x = = 2;"));
        assert!(rendered.ends_with("| ----^"));
    }
}

/// Renders an error with the offending source line underneath it.
///
/// ```text
/// Error: SyntaxError (expected expression, found `=`)
/// -> main.c:20:9
///    |
/// 20 | int a = =;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}", position));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("\n{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    // carets count characters, `line_pos` is a byte offset
    let arrows = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |before| before.chars().count())
        + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
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
