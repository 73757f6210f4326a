#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod output;

/// A character offset into a named source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the character at `position`.
///
/// Returns the 1-based line number, the line text and the character
/// column within that line. A position at or past the end of the source
/// resolves to the column just after the last character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let len = line.chars().count();
        let end = start + len;

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), len);
        start = end;
        line_number += 1;
    }

    if last.1.ends_with('\n') {
        // End of input sits at the start of an empty final line.
        return (line_number, String::new(), 0);
    }

    last
}


/// Renders a lexical error with the offending line and a caret under it.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: message (tip)
        -> prog.txt
          |
        2 | x = 1 & 2;
          | -------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        out.push(format!("Error: {}", error.get_error_name()));
    } else {
        out.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    out.push(format!("-> {}", position.1));
    out.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    out.join("\n")
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

    (string.chars().skip(start).collect(), start)
}
