use attest_tree::{describe_node, text, Item, ValueNode};
use attest_value::{describe_value, value_to_node, Value};

use crate::unexpected_type::unexpected_type_node;
use crate::Matcher;

/// Key-directed match against a map actual: each actual entry is reconciled
/// with the matcher for its key, using same-value-zero key equality. Entry
/// order never matters.
pub(crate) fn matches(entries: &[(Value, Matcher)], actual: &Value) -> ValueNode {
    let Value::Map(actual_entries) = actual else {
        return unexpected_type_node(actual, "map");
    };
    let actual_entries = actual_entries.snapshot();

    let mut reconciled = Vec::with_capacity(actual_entries.len());
    for (key, actual_value) in &actual_entries {
        match entries.iter().find(|(k, _)| k.same_value_zero(key)) {
            Some((_, matcher)) => reconciled.push(Item::Present {
                node: matcher.matches(actual_value),
            }),
            None => reconciled.push(Item::Extra {
                description: entry_text(key, &ValueNode::simple(describe_value(actual_value))),
                explanation: "^ unexpected entry".to_owned(),
            }),
        }
    }
    for (key, _) in entries {
        if actual_entries.iter().any(|(k, _)| k.same_value_zero(key)) {
            continue;
        }
        reconciled.push(Item::Missing {
            explanation: format!("Missing key:\n{}", text::indent(&describe_value(key))),
        });
    }
    ValueNode::array(reconciled)
}

pub(crate) fn describe(entries: &[(Value, Matcher)]) -> String {
    let contents = ValueNode::array(
        entries
            .iter()
            .map(|(key, matcher)| Item::Present {
                node: ValueNode::simple(entry_text(
                    key,
                    &ValueNode::simple(matcher.describe()),
                )),
            })
            .collect(),
    );
    format!("map({})", describe_node(&contents, ""))
}

// An entry renders as the two-element list `[key, value]`, same as the map
// constructor notation takes them.
fn entry_text(key: &Value, value: &ValueNode) -> String {
    let pair = ValueNode::array(vec![
        Item::Present {
            node: value_to_node(key),
        },
        Item::Present {
            node: value.clone(),
        },
    ]);
    describe_node(&pair, "")
}
