use attest_tree::ValueNode;
use attest_value::{describe_value, Value};

/// Mismatch leaf for an actual value of the wrong runtime kind, e.g.
/// `be a number, actually is a string`.
pub(crate) fn unexpected_type_node(actual: &Value, expected_kind: &str) -> ValueNode {
    ValueNode::simple_mismatch(
        describe_value(actual),
        format!(
            "be {}, actually is {}",
            with_article(expected_kind),
            with_article(actual.kind_name()),
        ),
    )
}

fn with_article(kind: &str) -> String {
    let vowel = kind
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    if vowel {
        format!("an {kind}")
    } else {
        format!("a {kind}")
    }
}
