use attest_tree::{describe_node, text, Item, ValueNode};
use attest_value::{describe_value, value_to_node, Value};

use crate::unexpected_type::unexpected_type_node;

/// Order-insensitive membership match against a set actual. Elements are
/// compared with same-value-zero equality, matching how sets deduplicate.
pub(crate) fn matches(elements: &[Value], actual: &Value) -> ValueNode {
    let Value::Set(actual_elements) = actual else {
        return unexpected_type_node(actual, "set");
    };
    let actual_elements = actual_elements.snapshot();

    let mut reconciled = Vec::with_capacity(actual_elements.len());
    for element in &actual_elements {
        let description = describe_value(element);
        if elements.iter().any(|e| e.same_value_zero(element)) {
            reconciled.push(Item::Present {
                node: ValueNode::simple(description),
            });
        } else {
            reconciled.push(Item::Extra {
                description,
                explanation: "^ unexpected element".to_owned(),
            });
        }
    }
    for expected in elements {
        if actual_elements.iter().any(|e| e.same_value_zero(expected)) {
            continue;
        }
        reconciled.push(Item::Missing {
            explanation: format!(
                "Missing element:\n{}",
                text::indent(&describe_value(expected)),
            ),
        });
    }
    ValueNode::array(reconciled)
}

pub(crate) fn describe(elements: &[Value]) -> String {
    let contents = ValueNode::array(
        elements
            .iter()
            .map(|element| Item::Present {
                node: value_to_node(element),
            })
            .collect(),
    );
    format!("set({})", describe_node(&contents, ""))
}
