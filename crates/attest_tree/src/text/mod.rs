//! Line-oriented text helpers shared by the formatter and the renderers.
//!
//! Indentation composes by simple concatenation of 2-space units; ANSI codes
//! wrap only literal text, never structural punctuation.

use std::fmt::Write;

#[cfg(test)]
mod tests;

const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Prefix every line except the first. Leaves a single-line string untouched,
/// so a multi-line part can continue on the column where it started.
pub fn prefix_lines_past_first(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}

/// Prefix every line, including the first (a fully offset block).
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len());
    out.push_str(prefix);
    out.push_str(&prefix_lines_past_first(text, prefix));
    out
}

/// Offset a block by one 2-space indentation unit.
pub fn indent(text: &str) -> String {
    prefix_lines(text, "  ")
}

/// Turn a block into line comments.
pub fn comment_out(text: &str) -> String {
    prefix_lines(text, "// ")
}

pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}

pub fn cyan(text: &str) -> String {
    format!("{CYAN}{text}{RESET}")
}

/// Double-quote `text` with JSON-style escaping.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// True for names that can stand bare as a property token.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
