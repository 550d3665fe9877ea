use attest_tree::{describe_node, text, Item, ValueNode};
use attest_value::{describe_value, Value};

use crate::unexpected_type::unexpected_type_node;
use crate::Matcher;

/// Positional list match: item `i` of the actual list is reconciled with
/// matcher `i`. Length differences surface as missing or extra items.
pub(crate) fn matches(items: &[Matcher], actual: &Value) -> ValueNode {
    let Value::List(actual_items) = actual else {
        return unexpected_type_node(actual, "array");
    };
    let actual_items = actual_items.snapshot();

    let mut reconciled = Vec::with_capacity(items.len().max(actual_items.len()));
    for (matcher, item) in items.iter().zip(&actual_items) {
        reconciled.push(Item::Present {
            node: matcher.matches(item),
        });
    }
    for (index, matcher) in items.iter().enumerate().skip(actual_items.len()) {
        reconciled.push(Item::Missing {
            explanation: format!(
                "Missing item at index {index}:\n{}",
                text::indent(&matcher.describe()),
            ),
        });
    }
    for (index, item) in actual_items.iter().enumerate().skip(items.len()) {
        reconciled.push(Item::Extra {
            description: describe_value(item),
            explanation: format!("^ unexpected item at index {index}"),
        });
    }
    ValueNode::array(reconciled)
}

pub(crate) fn describe(items: &[Matcher]) -> String {
    let node = ValueNode::array(
        items
            .iter()
            .map(|matcher| Item::Present {
                node: ValueNode::simple(matcher.describe()),
            })
            .collect(),
    );
    describe_node(&node, "")
}
