use std::sync::Arc;

use attest_tree::ValueNode;
use attest_value::{describe_value, Value};
use regex::Regex;

use crate::unexpected_type::unexpected_type_node;
use crate::{is, Matcher};

/// Matches strings that contain a match of `expected`. A pattern actual is
/// instead compared to `expected` by reference.
pub fn pattern(expected: Regex) -> Matcher {
    Matcher::Pattern {
        expected: Arc::new(expected),
    }
}

pub(crate) fn matches(expected: &Arc<Regex>, actual: &Value) -> ValueNode {
    match actual {
        Value::Pattern(_) => is::matches(&Value::Pattern(Arc::clone(expected)), actual),
        Value::Str(contents) => {
            let description = describe_value(actual);
            if expected.is_match(contents) {
                ValueNode::simple(description)
            } else {
                ValueNode::simple_mismatch(description, format!("match {}", describe(expected)))
            }
        }
        _ => unexpected_type_node(actual, "string"),
    }
}

pub(crate) fn describe(expected: &Arc<Regex>) -> String {
    describe_value(&Value::Pattern(Arc::clone(expected)))
}

#[cfg(test)]
mod tests;
