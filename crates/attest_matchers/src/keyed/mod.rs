use std::sync::Arc;

use attest_tree::{describe_node, text, Item, ValueNode};
use attest_value::{describe_value, Value};

use crate::unexpected_type::unexpected_type_node;
use crate::{to_matcher, Expected, KeyFn, Matcher};

/// Order-insensitive list match where each item is identified by one of its
/// fields. Each `spec` must be an object specification carrying `key_field`;
/// that field's value, normalized, pairs the spec with an actual item.
///
/// # Panics
///
/// Panics if two specs normalize to the same key.
pub fn keyed_items(key_field: &str, specs: Vec<Expected>) -> Matcher {
    keyed_items_by(key_field, specs, Value::clone)
}

/// Like [`keyed_items`], but runs `normalize` over every key before
/// comparing, e.g. to match identifiers case-insensitively.
pub fn keyed_items_by(
    key_field: &str,
    specs: Vec<Expected>,
    normalize: impl Fn(&Value) -> Value + Send + Sync + 'static,
) -> Matcher {
    let normalize: KeyFn = Arc::new(normalize);
    let mut entries: Vec<(Value, Matcher)> = Vec::with_capacity(specs.len());
    for spec in specs {
        let key = normalize(&spec_key(&spec, key_field));
        assert!(
            !entries.iter().any(|(k, _)| k.same_value_zero(&key)),
            "matchers passed to keyed_items() must have distinct keys; duplicate key: {}",
            describe_value(&key),
        );
        entries.push((key, to_matcher(spec)));
    }
    Matcher::Keyed {
        key_field: key_field.to_owned(),
        entries,
        normalize,
    }
}

fn spec_key(spec: &Expected, key_field: &str) -> Value {
    match spec {
        Expected::Value(value) => value.get_field(key_field).unwrap_or(Value::None),
        Expected::Fields(fields) => fields
            .iter()
            .find(|(name, _)| name == key_field)
            .and_then(|(_, expected)| match expected {
                Expected::Value(value) => Some(value.clone()),
                _ => None,
            })
            .unwrap_or(Value::None),
        _ => Value::None,
    }
}

pub(crate) fn matches(
    key_field: &str,
    entries: &[(Value, Matcher)],
    normalize: &KeyFn,
    actual: &Value,
) -> ValueNode {
    let Value::List(actual_items) = actual else {
        return unexpected_type_node(actual, "array");
    };

    // Duplicate actual keys collapse to one slot: first occurrence keeps its
    // position, the last occurrence supplies the value.
    let mut lookup: Vec<(Value, Value)> = Vec::new();
    for item in actual_items.snapshot() {
        let key = normalize(&item.get_field(key_field).unwrap_or(Value::None));
        match lookup.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
            Some(slot) => slot.1 = item,
            None => lookup.push((key, item)),
        }
    }

    let mut reconciled = Vec::with_capacity(lookup.len());
    for (key, item) in &lookup {
        match entries.iter().find(|(k, _)| k.same_value_zero(key)) {
            Some((_, matcher)) => reconciled.push(Item::Present {
                node: matcher.matches(item),
            }),
            None => reconciled.push(Item::Extra {
                description: describe_value(item),
                explanation: "^ unexpected item".to_owned(),
            }),
        }
    }
    for (key, matcher) in entries {
        if lookup.iter().any(|(k, _)| k.same_value_zero(key)) {
            continue;
        }
        reconciled.push(Item::Missing {
            explanation: format!("Missing item:\n{}", text::indent(&matcher.describe())),
        });
    }
    ValueNode::array(reconciled)
}

pub(crate) fn describe(entries: &[(Value, Matcher)]) -> String {
    let node = ValueNode::array(
        entries
            .iter()
            .map(|(_, matcher)| Item::Present {
                node: ValueNode::simple(matcher.describe()),
            })
            .collect(),
    );
    describe_node(&node, "")
}
