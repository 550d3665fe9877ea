use attest_tree::{describe_node, ValueNode};
use attest_value::Value;

use crate::unexpected_type::unexpected_type_node;
use crate::Matcher;

/// Partial record match: every expected field is checked against the
/// corresponding actual field, absent fields included as `none`, and actual
/// fields with no matcher are ignored.
pub(crate) fn matches(fields: &[(String, Matcher)], actual: &Value) -> ValueNode {
    if !matches!(actual, Value::Record(_)) {
        return unexpected_type_node(actual, "object");
    }
    let record = fields
        .iter()
        .map(|(name, matcher)| {
            let field_value = actual.get_field(name).unwrap_or(Value::None);
            (name.clone(), matcher.matches(&field_value))
        })
        .collect();
    ValueNode::object(record)
}

pub(crate) fn describe(fields: &[(String, Matcher)]) -> String {
    let node = ValueNode::object(
        fields
            .iter()
            .map(|(name, matcher)| (name.clone(), ValueNode::simple(matcher.describe())))
            .collect(),
    );
    describe_node(&node, "")
}
