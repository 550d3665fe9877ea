use attest_tree::ValueNode;
use attest_value::Value;
use pretty_assertions::assert_eq;
use regex::Regex;

use super::pattern;

fn re(source: &str) -> Regex {
    Regex::new(source).unwrap()
}

#[test]
fn matches_a_string_containing_the_pattern() {
    let matcher = pattern(re("^f"));
    assert_eq!(
        matcher.matches(&Value::from("foo")),
        ValueNode::simple("\"foo\""),
    );
}

#[test]
fn mismatches_a_string_without_the_pattern() {
    let matcher = pattern(re("^f"));
    assert_eq!(
        matcher.matches(&Value::from("oof")),
        ValueNode::simple_mismatch("\"oof\"", "match /^f/"),
    );
}

#[test]
fn matches_the_same_pattern_reference() {
    let expected = Value::from(re("^f"));
    let Value::Pattern(arc) = &expected else {
        unreachable!()
    };
    let matcher = super::Matcher::Pattern {
        expected: std::sync::Arc::clone(arc),
    };
    assert_eq!(matcher.matches(&expected), ValueNode::simple("/^f/"));
}

#[test]
fn rejects_a_different_pattern_reference() {
    let matcher = pattern(re("^f"));
    assert_eq!(
        matcher.matches(&Value::from(re("^g"))),
        ValueNode::simple_mismatch("/^g/", "be a specific reference to /^f/"),
    );
}

#[test]
fn describes_in_slash_notation() {
    assert_eq!(pattern(re("^f")).describe(), "/^f/");
}

#[test]
fn reports_a_non_string_actual() {
    let matcher = pattern(re("^f"));
    assert_eq!(
        matcher.matches(&Value::int(3)),
        ValueNode::simple_mismatch("3", "be a string, actually is an int"),
    );
}
