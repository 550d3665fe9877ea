use pretty_assertions::assert_eq;

use super::*;

fn failing_leaf() -> ValueNode {
    ValueNode::simple_mismatch("3", "be 4")
}

#[test]
fn ok_leaf_is_ok() {
    assert!(ValueNode::simple("3").is_ok());
}

#[test]
fn mismatching_leaf_is_not_ok() {
    assert!(!failing_leaf().is_ok());
}

#[test]
fn ellipsis_is_ok() {
    assert!(ValueNode::Ellipsis.is_ok());
}

#[test]
fn empty_collections_are_ok() {
    assert!(ValueNode::array(vec![]).is_ok());
    assert!(ValueNode::object(vec![]).is_ok());
}

#[test]
fn array_ok_requires_every_item_present_and_ok() {
    let ok = ValueNode::array(vec![Item::Present {
        node: ValueNode::simple("1"),
    }]);
    assert!(ok.is_ok());

    let nested_failure = ValueNode::array(vec![Item::Present {
        node: failing_leaf(),
    }]);
    assert!(!nested_failure.is_ok());

    let missing = ValueNode::array(vec![Item::Missing {
        explanation: "Missing item at index 0:\n  1".to_owned(),
    }]);
    assert!(!missing.is_ok());

    let extra = ValueNode::array(vec![Item::Extra {
        description: "2".to_owned(),
        explanation: "^ unexpected item at index 0".to_owned(),
    }]);
    assert!(!extra.is_ok());
}

#[test]
fn object_ok_requires_every_entry_ok() {
    let ok = ValueNode::object(vec![("a".to_owned(), ValueNode::simple("1"))]);
    assert!(ok.is_ok());

    let bad = ValueNode::object(vec![
        ("a".to_owned(), ValueNode::simple("1")),
        ("b".to_owned(), failing_leaf()),
    ]);
    assert!(!bad.is_ok());
}

#[test]
fn serializes_with_kind_tags() {
    let node = ValueNode::object(vec![
        ("ok".to_owned(), ValueNode::simple("1")),
        ("cycle".to_owned(), ValueNode::Ellipsis),
    ]);
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["kind"], "object");
    assert_eq!(json["record"][0][1]["kind"], "simple");
    assert_eq!(json["record"][0][1]["description"], "1");
    assert_eq!(json["record"][1][1]["kind"], "...");
}

#[test]
fn serializes_mismatch_only_when_present() {
    let ok = serde_json::to_value(ValueNode::simple("1")).unwrap();
    assert!(ok.get("mismatch").is_none());

    let bad = serde_json::to_value(failing_leaf()).unwrap();
    assert_eq!(bad["mismatch"]["expected"], "be 4");
}
