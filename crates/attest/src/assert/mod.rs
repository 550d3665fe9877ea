use attest_matchers::{compares, is, near, to_matcher, Expected, Operator};
use attest_tree::{describe_node, text};
use attest_value::Value;
use thiserror::Error;

/// A failed assertion. The message is the full annotated report of the
/// actual value, ready to print to a terminal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    /// The annotated report, including ANSI color codes.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Checks `actual` against an expected specification: a plain value, an
/// explicit matcher, or a nested [`Expected`] mixing both.
pub fn assert_matches(
    actual: &Value,
    expected: impl Into<Expected>,
) -> Result<(), AssertionError> {
    let matcher = to_matcher(expected);
    let node = matcher.matches(actual);
    if node.is_ok() {
        return Ok(());
    }
    let report = describe_node(&node, "");
    tracing::trace!(report = %report, "assertion failed");
    Err(AssertionError {
        message: format!("Actual:\n\n{}\n", text::indent(&report)),
    })
}

/// Checks that `actual` is the very value `expected`: scalars by content,
/// containers and patterns by reference.
pub fn assert_identical(
    actual: &Value,
    expected: impl Into<Value>,
) -> Result<(), AssertionError> {
    assert_matches(actual, is(expected))
}

/// Checks that `actual` is a number ordered `operator` relative to `limit`.
pub fn assert_compares(
    actual: &Value,
    operator: Operator,
    limit: impl Into<Value>,
) -> Result<(), AssertionError> {
    assert_matches(actual, compares(operator, limit))
}

/// Checks that `actual` is a number within `epsilon` of `target`.
pub fn assert_near(actual: &Value, target: f64, epsilon: f64) -> Result<(), AssertionError> {
    assert_matches(actual, near(target, epsilon))
}
