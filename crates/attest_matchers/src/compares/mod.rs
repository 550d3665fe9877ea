use std::cmp::Ordering;
use std::fmt;

use attest_tree::{text, ValueNode};
use attest_value::{describe_value, Value};

use crate::unexpected_type::unexpected_type_node;
use crate::Matcher;

/// Ordering accepted by a comparison matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessEq => "<=",
            Operator::Greater => ">",
            Operator::GreaterEq => ">=",
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Operator::Less => ordering == Ordering::Less,
            Operator::LessEq => ordering != Ordering::Greater,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::GreaterEq => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches numbers ordered `operator` relative to `limit`.
///
/// # Panics
///
/// Panics if `limit` is not a number; that is a mistake in the expectation,
/// not a property of the actual value.
pub fn compares(operator: Operator, limit: impl Into<Value>) -> Matcher {
    let limit = limit.into();
    assert!(
        limit.is_number(),
        "compares() limit must be a number, got {}",
        limit.kind_name(),
    );
    Matcher::Compares { operator, limit }
}

pub(crate) fn matches(operator: Operator, limit: &Value, actual: &Value) -> ValueNode {
    if !actual.is_number() {
        return unexpected_type_node(actual, "number");
    }
    let description = describe_value(actual);
    let accepted = compare(actual, limit).is_some_and(|ordering| operator.accepts(ordering));
    if accepted {
        ValueNode::simple(description)
    } else {
        ValueNode::simple_mismatch(
            description,
            format!("be {} {}", operator.as_str(), describe_value(limit)),
        )
    }
}

pub(crate) fn describe(operator: Operator, limit: &Value) -> String {
    format!(
        "compares({}, {})",
        text::quote(operator.as_str()),
        describe_value(limit),
    )
}

/// Orders two numbers exactly even across kinds. Returns `None` when either
/// side is NaN, which no operator accepts.
fn compare(actual: &Value, limit: &Value) -> Option<Ordering> {
    match (actual, limit) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
        (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
        _ => None,
    }
}

// A plain `as f64` cast rounds large integers, so compare against the
// float's floor instead of converting the integer.
fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    const I128_SPAN: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0; // 2^127
    if float >= I128_SPAN {
        return Some(Ordering::Less);
    }
    if float < -I128_SPAN {
        return Some(Ordering::Greater);
    }
    let floor = float.floor();
    #[allow(clippy::cast_possible_truncation)]
    let floor_int = floor as i128;
    match int.cmp(&floor_int) {
        Ordering::Less => Some(Ordering::Less),
        Ordering::Greater => Some(Ordering::Greater),
        Ordering::Equal => {
            if float > floor {
                Some(Ordering::Less)
            } else {
                Some(Ordering::Equal)
            }
        }
    }
}

#[cfg(test)]
mod tests;
