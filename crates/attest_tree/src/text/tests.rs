use pretty_assertions::assert_eq;

use super::*;

#[test]
fn prefix_past_first_leaves_single_line_untouched() {
    assert_eq!(prefix_lines_past_first("foo", "Z"), "foo");
}

#[test]
fn prefix_past_first_prefixes_continuation_lines() {
    assert_eq!(prefix_lines_past_first("foo\nbar", "Z"), "foo\nZbar");
}

#[test]
fn prefix_lines_prefixes_every_line() {
    assert_eq!(prefix_lines("foo\nbar", "Z"), "Zfoo\nZbar");
}

#[test]
fn indent_uses_two_spaces() {
    assert_eq!(indent("foo\nbar"), "  foo\n  bar");
}

#[test]
fn indent_units_compose_by_concatenation() {
    assert_eq!(indent(&indent("foo")), "    foo");
}

#[test]
fn comment_out_prefixes_each_physical_line() {
    assert_eq!(comment_out("foo\nbar"), "// foo\n// bar");
}

#[test]
fn red_wraps_in_ansi_codes() {
    assert_eq!(red("foo"), "\u{1b}[31mfoo\u{1b}[0m");
}

#[test]
fn cyan_wraps_in_ansi_codes() {
    assert_eq!(cyan("foo"), "\u{1b}[36mfoo\u{1b}[0m");
}

#[test]
fn quote_escapes_like_json() {
    assert_eq!(quote("hello"), "\"hello\"");
    assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    assert_eq!(quote("line1\nline2"), "\"line1\\nline2\"");
    assert_eq!(quote("tab\there"), "\"tab\\there\"");
    assert_eq!(quote("\u{1}"), "\"\\u0001\"");
}

#[test]
fn identifier_recognition() {
    assert!(is_identifier("foo"));
    assert!(is_identifier("_foo2"));
    assert!(is_identifier("Bar"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("2foo"));
    assert!(!is_identifier("foo-bar"));
    assert!(!is_identifier("foo bar"));
}
