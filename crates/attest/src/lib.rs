//! Structural assertions with annotated mismatch reports.
//!
//! An assertion compares an actual [`Value`] against an expected
//! specification: a plain value, a pattern, a numeric bound, or a nested
//! mix of values and explicit matchers. On failure the error carries a
//! report that renders the actual value as pseudo-code, with every
//! mismatching part highlighted in red and explained by a cyan `// `
//! comment directly beneath it.
//!
//! ```
//! use attest::{assert_matches, near, Expected, Value};
//!
//! let cheeta = Value::record(vec![
//!     ("name", Value::from("Cheeta")),
//!     ("height_in_meters", Value::from(1.67)),
//! ]);
//! let tarzan = Value::record(vec![
//!     ("user_id", Value::from(123)),
//!     ("name", Value::from("Tarzan")),
//!     ("pets", Value::list(vec![cheeta])),
//! ]);
//!
//! assert_matches(
//!     &tarzan,
//!     Expected::fields(vec![
//!         ("name", Expected::from("Tarzan")),
//!         (
//!             "pets",
//!             Expected::items(vec![Expected::fields(vec![
//!                 ("name", Expected::from("Cheeta")),
//!                 ("height_in_meters", Expected::from(near(1.6, 0.1))),
//!             ])]),
//!         ),
//!         // `user_id` is not specified, so it can be anything.
//!     ]),
//! )
//! .unwrap();
//! ```

mod assert;

pub use assert::{
    assert_compares, assert_identical, assert_matches, assert_near, AssertionError,
};
pub use attest_matchers::{
    compares, is, keyed_items, keyed_items_by, near, pattern, satisfies, to_matcher, Expected,
    Matcher, Operator,
};
pub use attest_tree::{describe_node, Item, Mismatch, ValueNode};
pub use attest_value::{describe_value, value_to_node, Heap, Value};
