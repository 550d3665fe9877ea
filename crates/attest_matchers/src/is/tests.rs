use attest_tree::ValueNode;
use attest_value::Value;
use pretty_assertions::assert_eq;

use super::is;

#[test]
fn matches_the_same_record_reference() {
    let record = Value::record::<String>(vec![]);
    let matcher = is(record.clone());
    assert_eq!(matcher.matches(&record), ValueNode::simple("{}"));
}

#[test]
fn rejects_an_equal_but_distinct_record() {
    let matcher = is(Value::record::<String>(vec![]));
    assert_eq!(
        matcher.matches(&Value::record::<String>(vec![])),
        ValueNode::simple_mismatch("{}", "be a specific reference to {}"),
    );
}

#[test]
fn explains_a_multi_line_expected_reference_on_its_own_lines() {
    let expected = Value::list(vec![Value::int(1)]);
    let matcher = is(expected);
    assert_eq!(
        matcher.matches(&Value::list(vec![Value::int(1)])),
        ValueNode::simple_mismatch(
            "[\n  1,\n]",
            "be a specific reference to:\n  [\n    1,\n  ]",
        ),
    );
}

#[test]
fn compares_scalars_by_content() {
    let matcher = is(7);
    assert_eq!(matcher.matches(&Value::int(7)), ValueNode::simple("7"));
    assert_eq!(
        matcher.matches(&Value::int(8)),
        ValueNode::simple_mismatch("8", "be 7"),
    );
}

#[test]
fn treats_nan_as_identical_to_nan() {
    let matcher = is(f64::NAN);
    assert_eq!(
        matcher.matches(&Value::float(f64::NAN)),
        ValueNode::simple("f64::NAN"),
    );
}

#[test]
fn distinguishes_the_zero_signs() {
    let matcher = is(0.0);
    assert_eq!(
        matcher.matches(&Value::float(-0.0)),
        ValueNode::simple_mismatch("-0.0", "be 0.0"),
    );
}

#[test]
fn never_conflates_int_and_float() {
    let matcher = is(2);
    assert_eq!(
        matcher.matches(&Value::float(2.0)),
        ValueNode::simple_mismatch("2.0", "be 2"),
    );
}

#[test]
fn describes_as_the_expected_rendering() {
    assert_eq!(is(Value::record::<String>(vec![])).describe(), "{}");
    assert_eq!(is("foo").describe(), "\"foo\"");
}
