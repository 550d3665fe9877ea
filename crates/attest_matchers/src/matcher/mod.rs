use std::fmt;
use std::sync::Arc;

use attest_tree::ValueNode;
use attest_value::Value;
use regex::Regex;

use crate::compares::Operator;
use crate::{array, compares, date, is, keyed, map, near, object, pattern, satisfies, set};

/// Predicate over an actual value, used by [`Matcher::Satisfies`].
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Key normalization applied by [`Matcher::Keyed`] to both expected and
/// actual keys before they are compared.
pub type KeyFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A single expectation against an actual value.
///
/// The set of variants is closed on purpose: every way of matching is listed
/// here, and both [`matches`](Matcher::matches) and
/// [`describe`](Matcher::describe) dispatch over the same list, so a new kind
/// of matcher cannot be added without deciding how it reports.
#[derive(Clone)]
pub enum Matcher {
    /// Same-value identity with `expected`.
    Is { expected: Value },
    /// Numeric ordering against `limit`.
    Compares { operator: Operator, limit: Value },
    /// Numeric closeness: within `epsilon` of `target`.
    Near { target: f64, epsilon: f64 },
    /// Regex match over a string actual.
    Pattern { expected: Arc<Regex> },
    /// Timestamp equality, millisecond precision.
    Date { expected_ms: i64 },
    /// Arbitrary predicate with a reporting description.
    Satisfies {
        predicate: PredicateFn,
        description: String,
    },
    /// Partial record match: named fields, extra actual fields ignored.
    Object { fields: Vec<(String, Matcher)> },
    /// Positional list match, one matcher per index.
    Array { items: Vec<Matcher> },
    /// Set membership, order-insensitive.
    Set { elements: Vec<Value> },
    /// Keyed map match, order-insensitive.
    Map { entries: Vec<(Value, Matcher)> },
    /// Order-insensitive list match keyed by one field of each item.
    Keyed {
        key_field: String,
        entries: Vec<(Value, Matcher)>,
        normalize: KeyFn,
    },
}

impl Matcher {
    /// Reconciles `actual` against this matcher, producing a description
    /// tree that is all-ok exactly when the match succeeds.
    pub fn matches(&self, actual: &Value) -> ValueNode {
        match self {
            Matcher::Is { expected } => is::matches(expected, actual),
            Matcher::Compares { operator, limit } => compares::matches(*operator, limit, actual),
            Matcher::Near { target, epsilon } => near::matches(*target, *epsilon, actual),
            Matcher::Pattern { expected } => pattern::matches(expected, actual),
            Matcher::Date { expected_ms } => date::matches(*expected_ms, actual),
            Matcher::Satisfies {
                predicate,
                description,
            } => satisfies::matches(predicate, description, actual),
            Matcher::Object { fields } => object::matches(fields, actual),
            Matcher::Array { items } => array::matches(items, actual),
            Matcher::Set { elements } => set::matches(elements, actual),
            Matcher::Map { entries } => map::matches(entries, actual),
            Matcher::Keyed {
                key_field,
                entries,
                normalize,
            } => keyed::matches(key_field, entries, normalize, actual),
        }
    }

    /// Renders what this matcher expects, in the same notation the
    /// reconciliation report uses for values. Composite matchers produce
    /// multi-line text.
    pub fn describe(&self) -> String {
        match self {
            Matcher::Is { expected } => is::describe(expected),
            Matcher::Compares { operator, limit } => compares::describe(*operator, limit),
            Matcher::Near { target, epsilon } => near::describe(*target, *epsilon),
            Matcher::Pattern { expected } => pattern::describe(expected),
            Matcher::Date { expected_ms } => date::describe(*expected_ms),
            Matcher::Satisfies { description, .. } => satisfies::describe(description),
            Matcher::Object { fields } => object::describe(fields),
            Matcher::Array { items } => array::describe(items),
            Matcher::Set { elements } => set::describe(elements),
            Matcher::Map { entries } => map::describe(entries),
            Matcher::Keyed { entries, .. } => keyed::describe(entries),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matcher({})", self.describe())
    }
}
