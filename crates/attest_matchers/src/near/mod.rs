use attest_tree::ValueNode;
use attest_value::{describe_value, Value};

use crate::unexpected_type::unexpected_type_node;
use crate::Matcher;

/// Matches numbers within `epsilon` of `target`, inclusive at both edges.
///
/// # Panics
///
/// Panics if `epsilon` is negative or NaN.
pub fn near(target: f64, epsilon: f64) -> Matcher {
    // `>= 0.0` instead of `!(< 0.0)` so a NaN epsilon is also rejected.
    assert!(
        epsilon >= 0.0,
        "near() epsilon must be a non-negative number, got {epsilon:?}",
    );
    Matcher::Near { target, epsilon }
}

pub(crate) fn matches(target: f64, epsilon: f64, actual: &Value) -> ValueNode {
    let Some(number) = actual.as_f64() else {
        return unexpected_type_node(actual, "number");
    };
    let description = describe_value(actual);
    // A NaN actual (or target) fails the comparison, never passes it.
    if (number - target).abs() <= epsilon {
        ValueNode::simple(description)
    } else {
        ValueNode::simple_mismatch(
            description,
            format!("be near {} ± {}", float_text(target), float_text(epsilon)),
        )
    }
}

pub(crate) fn describe(target: f64, epsilon: f64) -> String {
    format!("near({}, {})", float_text(target), float_text(epsilon))
}

fn float_text(number: f64) -> String {
    describe_value(&Value::float(number))
}
