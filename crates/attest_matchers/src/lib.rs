//! Matchers decide, for one expected value, whether an actual value is
//! acceptable, and they always answer with a [`ValueNode`](attest_tree::ValueNode)
//! describing the actual value rather than a bare yes/no. A passing match
//! yields an all-ok tree; a failing match yields the same tree with mismatch
//! annotations attached where the values diverge.
//!
//! Most call sites never name a matcher type. They hand [`to_matcher`] a
//! plain value or a nested specification and let coercion build the matcher
//! tree: lists become positional array matchers, records become partial
//! object matchers, dates and patterns become their dedicated matchers, and
//! anything else is compared for identity.

mod array;
mod compares;
mod date;
mod expected;
mod is;
mod keyed;
mod map;
mod matcher;
mod near;
mod object;
mod pattern;
mod satisfies;
mod set;
mod unexpected_type;

pub use compares::{compares, Operator};
pub use expected::{to_matcher, Expected};
pub use is::is;
pub use keyed::{keyed_items, keyed_items_by};
pub use matcher::{KeyFn, Matcher, PredicateFn};
pub use near::near;
pub use pattern::pattern;
pub use satisfies::satisfies;
