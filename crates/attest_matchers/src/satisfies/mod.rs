use std::sync::Arc;

use attest_tree::{text, ValueNode};
use attest_value::{describe_value, Value};

use crate::{Matcher, PredicateFn};

/// Matches any value the predicate accepts. `description` is reported
/// verbatim as the expectation when the predicate rejects, so phrase it as
/// a completion of "expected to", e.g. `"be odd"`.
pub fn satisfies(
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    description: impl Into<String>,
) -> Matcher {
    Matcher::Satisfies {
        predicate: Arc::new(predicate),
        description: description.into(),
    }
}

pub(crate) fn matches(predicate: &PredicateFn, description: &str, actual: &Value) -> ValueNode {
    let rendering = describe_value(actual);
    if predicate(actual) {
        ValueNode::simple(rendering)
    } else {
        ValueNode::simple_mismatch(rendering, description.to_owned())
    }
}

pub(crate) fn describe(description: &str) -> String {
    if description.contains('\n') {
        format!(
            "satisfies(\n  ...,\n{}\n)",
            text::indent(&describe_value(&Value::from(description))),
        )
    } else {
        format!("satisfies(..., {})", text::quote(description))
    }
}
