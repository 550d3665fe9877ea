use attest_tree::ValueNode;
use attest_value::Value;
use pretty_assertions::assert_eq;

use super::{compares, Operator};

#[test]
fn less_or_equal() {
    let matcher = compares(Operator::LessEq, 2);
    assert_eq!(matcher.matches(&Value::int(1)), ValueNode::simple("1"));
    assert_eq!(matcher.matches(&Value::int(2)), ValueNode::simple("2"));
    assert_eq!(
        matcher.matches(&Value::int(3)),
        ValueNode::simple_mismatch("3", "be <= 2"),
    );
}

#[test]
fn strictly_less() {
    let matcher = compares(Operator::Less, 2);
    assert_eq!(matcher.matches(&Value::int(1)), ValueNode::simple("1"));
    assert_eq!(
        matcher.matches(&Value::int(2)),
        ValueNode::simple_mismatch("2", "be < 2"),
    );
}

#[test]
fn greater_or_equal() {
    let matcher = compares(Operator::GreaterEq, 2);
    assert_eq!(matcher.matches(&Value::int(2)), ValueNode::simple("2"));
    assert_eq!(
        matcher.matches(&Value::int(1)),
        ValueNode::simple_mismatch("1", "be >= 2"),
    );
}

#[test]
fn strictly_greater() {
    let matcher = compares(Operator::Greater, 2);
    assert_eq!(matcher.matches(&Value::int(3)), ValueNode::simple("3"));
    assert_eq!(
        matcher.matches(&Value::int(2)),
        ValueNode::simple_mismatch("2", "be > 2"),
    );
}

#[test]
fn orders_across_int_and_float_exactly() {
    let matcher = compares(Operator::Less, 2.5);
    assert_eq!(matcher.matches(&Value::int(2)), ValueNode::simple("2"));
    assert_eq!(
        matcher.matches(&Value::int(3)),
        ValueNode::simple_mismatch("3", "be < 2.5"),
    );

    // 2^110 + 1 rounds to 2^110 as an f64. The comparison must not.
    let big = 1_i128 << 110;
    #[allow(clippy::cast_precision_loss)]
    let matcher = compares(Operator::Greater, big as f64);
    assert!(matcher.matches(&Value::int(big + 1)).is_ok());
    assert!(!matcher.matches(&Value::int(big)).is_ok());
}

#[test]
fn infinities_order_every_number() {
    assert!(compares(Operator::Less, f64::INFINITY)
        .matches(&Value::int(i128::MAX))
        .is_ok());
    assert!(compares(Operator::Greater, f64::NEG_INFINITY)
        .matches(&Value::int(i128::MIN))
        .is_ok());
}

#[test]
fn nan_is_ordered_with_nothing() {
    for operator in [
        Operator::Less,
        Operator::LessEq,
        Operator::Greater,
        Operator::GreaterEq,
    ] {
        assert!(!compares(operator, f64::NAN)
            .matches(&Value::int(1))
            .is_ok());
        assert!(!compares(operator, 1.0)
            .matches(&Value::float(f64::NAN))
            .is_ok());
    }
}

#[test]
fn describes_with_quoted_operator() {
    let matcher = compares(Operator::Greater, 2);
    assert_eq!(matcher.describe(), "compares(\">\", 2)");
}

#[test]
fn reports_a_non_numeric_actual() {
    let matcher = compares(Operator::Greater, 2);
    assert_eq!(
        matcher.matches(&Value::from("foo")),
        ValueNode::simple_mismatch("\"foo\"", "be a number, actually is a string"),
    );
}

#[test]
#[should_panic(expected = "limit must be a number")]
fn rejects_a_non_numeric_limit() {
    let _ = compares(Operator::Greater, "2");
}
