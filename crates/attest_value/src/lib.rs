//! Dynamic value model and cycle-safe renderer.
//!
//! [`Value`] is the runtime representation of the data an assertion inspects:
//! scalars inline, collections behind [`Heap`] (shared, identity-carrying
//! storage). [`value_to_node`] converts any value into an always-ok mismatch
//! tree, and [`describe_value`] renders it as canonical pseudo-code; both
//! terminate on self-referential graphs by emitting an ellipsis at the
//! back-edge.

mod render;
mod stack;
mod value;

pub use render::{describe_value, value_to_node, MAX_DEPTH};
pub use stack::ensure_sufficient_stack;
pub use value::{Heap, Value};
