#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::statements::Program,
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

/// A byte offset into a source buffer, together with the name of the
/// buffer it belongs to.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses an in-memory source buffer in one step.
///
/// This is the main entry point for callers that do not need the token
/// stream. The returned tree is owned exclusively by the caller; the
/// parser keeps no state between calls.
pub fn parse_program(source: String, file: Option<String>) -> Result<Program, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source, Rc::clone(&file))?;
    parse(tokens, file)
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    if source.is_empty() {
        return (1, String::new(), 0);
    }

    // Errors raised at the EOF token sit one past the last character.
    let pos = (position as usize).min(source.len() - 1);

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
        -> final.rhl
           |
        20 | x: int = #;
           | ---------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nSecond line\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 35);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_position_past_end() {
        let source = "x = 1;";
        let (line_number, _, line_pos) = super::get_line_at_position(source, 100);
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 5);
    }
}
