//! Renders a mismatch tree as annotated pseudo-code.
//!
//! The output aims to be valid code for the values involved, with mismatch
//! explanations attached as `// ` comments: red for the failing value or the
//! missing-item block, cyan for the explanation beneath it.

use crate::node::{Item, ValueNode};
use crate::text::{comment_out, cyan, indent, is_identifier, quote, red};

#[cfg(test)]
mod tests;

/// Returns a formatted description of the node and its mismatches.
///
/// `trailing_comma` is appended to the value itself (`""` at the top level,
/// `","` for items nested in a collection); explanations render after it.
pub fn describe_node(node: &ValueNode, trailing_comma: &str) -> String {
    match node {
        ValueNode::Simple {
            description,
            mismatch,
        } => match mismatch {
            Some(mismatch) => {
                let explanation = cyan(&comment_out(&format!(
                    "^ expected to {}",
                    mismatch.expected
                )));
                format!("{}{trailing_comma}\n{explanation}", red(description))
            }
            None => format!("{description}{trailing_comma}"),
        },
        ValueNode::Array { items } => {
            if items.is_empty() {
                return format!("[]{trailing_comma}");
            }
            let mut contents = String::new();
            for item in items {
                contents.push_str(&indent(&describe_item(item)));
                contents.push('\n');
            }
            format!("[\n{contents}]{trailing_comma}")
        }
        ValueNode::Object { record } => {
            if record.is_empty() {
                return format!("{{}}{trailing_comma}");
            }
            let mut contents = String::new();
            for (property, node) in record {
                let entry = format!("{}: {}", property_token(property), describe_node(node, ","));
                contents.push_str(&indent(&entry));
                contents.push('\n');
            }
            format!("{{\n{contents}}}{trailing_comma}")
        }
        ValueNode::Ellipsis => format!("...{trailing_comma}"),
    }
}

fn describe_item(item: &Item) -> String {
    match item {
        Item::Present { node } => describe_node(node, ","),
        Item::Extra {
            description,
            explanation,
        } => format!("{},\n{}", red(description), cyan(&comment_out(explanation))),
        // No trailing comma: the item represents an absence.
        Item::Missing { explanation } => red(&comment_out(explanation)),
    }
}

/// Returns a possibly-quoted token for the given property name.
pub fn property_token(property: &str) -> String {
    if is_identifier(property) {
        property.to_owned()
    } else {
        quote(property)
    }
}
