//! Mismatch tree model and diagnostic formatter.
//!
//! A matching pass produces a [`ValueNode`] tree describing the actual value
//! with mismatches attached to the offending sub-values. The tree alone
//! decides pass/fail ([`ValueNode::is_ok`]); [`describe_node`] then renders a
//! failing tree as annotated pseudo-code with ANSI colors.

mod describe;
mod node;
pub mod text;

pub use describe::{describe_node, property_token};
pub use node::{Item, Mismatch, ValueNode};
