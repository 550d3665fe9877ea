use attest_tree::ValueNode;
use attest_value::{describe_value, Value};

use crate::unexpected_type::unexpected_type_node;

/// Timestamps are scalar values, so unlike other containers-by-reference
/// they match by content: equal milliseconds since the epoch.
pub(crate) fn matches(expected_ms: i64, actual: &Value) -> ValueNode {
    match actual {
        Value::Date(actual_ms) => {
            let description = describe_value(actual);
            if *actual_ms == expected_ms {
                ValueNode::simple(description)
            } else {
                ValueNode::simple_mismatch(description, format!("be {}", describe(expected_ms)))
            }
        }
        _ => unexpected_type_node(actual, "date"),
    }
}

pub(crate) fn describe(expected_ms: i64) -> String {
    describe_value(&Value::Date(expected_ms))
}
