//! Result of comparing an actual value against a matcher.
//!
//! Mismatches are stored within sub-nodes: a tree is "ok" only when no node
//! anywhere in it carries a mismatch, a missing item, or an extra item.
//! Trees are built bottom-up during one matching pass and never mutated
//! afterward.

use serde::Serialize;

#[cfg(test)]
mod tests;

/// Describes the expected value at a mismatching leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Must read naturally after "expected to ", starting with a verb,
    /// e.g. "be positive". May span multiple lines.
    pub expected: String,
}

/// One reconciliation slot of an `Array` node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// A matcher was found for the item. Does not mean the item matches:
    /// the sub-node may itself carry mismatches.
    Present { node: ValueNode },
    /// An expected item with no counterpart in the actual collection.
    /// Triggers a mismatch; `explanation` is ready to render as a comment.
    Missing { explanation: String },
    /// An actual item with no matcher. Triggers a mismatch; `explanation`
    /// starts with `^` so it points at `description` once rendered above it.
    Extra {
        description: String,
        explanation: String,
    },
}

impl Item {
    fn is_ok(&self) -> bool {
        match self {
            Item::Present { node } => node.is_ok(),
            Item::Missing { .. } | Item::Extra { .. } => false,
        }
    }
}

/// A described actual value, with any mismatches attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueNode {
    /// A value without sub-nodes. `description` is its canonical rendering.
    Simple {
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        mismatch: Option<Mismatch>,
    },
    /// A collection value, e.g. a list or the reconciliation of a set.
    Array { items: Vec<Item> },
    /// A collection of name-value pairs, in insertion order.
    /// Builders must not produce two entries with the same key.
    Object { record: Vec<(String, ValueNode)> },
    /// Rendered as `...`: the value is already being described higher up the
    /// tree. Breaks reference cycles; never a mismatch.
    #[serde(rename = "...")]
    Ellipsis,
}

impl ValueNode {
    /// Leaf describing a value, no mismatch.
    pub fn simple(description: impl Into<String>) -> Self {
        ValueNode::Simple {
            description: description.into(),
            mismatch: None,
        }
    }

    /// Leaf describing a value that failed to match.
    pub fn simple_mismatch(description: impl Into<String>, expected: impl Into<String>) -> Self {
        ValueNode::Simple {
            description: description.into(),
            mismatch: Some(Mismatch {
                expected: expected.into(),
            }),
        }
    }

    pub fn array(items: Vec<Item>) -> Self {
        ValueNode::Array { items }
    }

    pub fn object(record: Vec<(String, ValueNode)>) -> Self {
        ValueNode::Object { record }
    }

    /// True iff nothing anywhere in the tree mismatches.
    pub fn is_ok(&self) -> bool {
        match self {
            ValueNode::Simple { mismatch, .. } => mismatch.is_none(),
            ValueNode::Array { items } => items.iter().all(Item::is_ok),
            ValueNode::Object { record } => record.iter().all(|(_, node)| node.is_ok()),
            ValueNode::Ellipsis => true,
        }
    }
}
