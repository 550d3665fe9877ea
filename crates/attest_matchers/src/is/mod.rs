use attest_tree::{text, ValueNode};
use attest_value::{describe_value, Value};

use crate::Matcher;

/// Matches only the exact `expected` value: scalars by content, containers
/// and patterns by reference, so an equal-but-distinct container fails.
pub fn is(expected: impl Into<Value>) -> Matcher {
    Matcher::Is {
        expected: expected.into(),
    }
}

pub(crate) fn matches(expected: &Value, actual: &Value) -> ValueNode {
    let description = describe_value(actual);
    if actual.same_value(expected) {
        ValueNode::simple(description)
    } else {
        ValueNode::simple_mismatch(description, expected_text(expected))
    }
}

pub(crate) fn describe(expected: &Value) -> String {
    describe_value(expected)
}

// Containers and patterns match by reference, and the explanation has to
// say so or an identical-looking rendering of the expected value reads as
// a lie.
fn expected_text(expected: &Value) -> String {
    let by_reference = expected.is_composite() || matches!(expected, Value::Pattern(_));
    let rendering = describe_value(expected);
    if !by_reference {
        format!("be {rendering}")
    } else if rendering.contains('\n') {
        format!(
            "be a specific reference to:\n{}",
            text::indent(&rendering)
        )
    } else {
        format!("be a specific reference to {rendering}")
    }
}

#[cfg(test)]
mod tests;
