use pretty_assertions::assert_eq;

use super::*;

#[test]
fn describes_ok_leaf() {
    assert_eq!(describe_node(&ValueNode::simple("3"), ""), "3");
    assert_eq!(describe_node(&ValueNode::simple("3"), ","), "3,");
}

#[test]
fn describes_mismatching_leaf() {
    let node = ValueNode::simple_mismatch("-3", "be positive");
    assert_eq!(
        describe_node(&node, ""),
        "\u{1b}[31m-3\u{1b}[0m\n\u{1b}[36m// ^ expected to be positive\u{1b}[0m",
    );
}

#[test]
fn comments_each_line_of_a_multiline_expectation() {
    let node = ValueNode::simple_mismatch("-3", "be\npositive");
    assert_eq!(
        describe_node(&node, ""),
        "\u{1b}[31m-3\u{1b}[0m\n\u{1b}[36m// ^ expected to be\n// positive\u{1b}[0m",
    );
}

#[test]
fn describes_array_with_extra_item() {
    let node = ValueNode::array(vec![
        Item::Present {
            node: ValueNode::simple("10"),
        },
        Item::Extra {
            description: "20".to_owned(),
            explanation: "^ unexpected item at index 1".to_owned(),
        },
    ]);
    assert_eq!(
        describe_node(&node, ""),
        concat!(
            "[\n",
            "  10,\n",
            "  \u{1b}[31m20\u{1b}[0m,\n",
            "  \u{1b}[36m// ^ unexpected item at index 1\u{1b}[0m\n",
            "]",
        ),
    );
}

#[test]
fn describes_complex_node() {
    let node = ValueNode::object(vec![
        (
            "f".to_owned(),
            ValueNode::array(vec![
                Item::Present {
                    node: ValueNode::simple_mismatch("3", "be 4"),
                },
                Item::Extra {
                    description: "4".to_owned(),
                    explanation: "^ unexpected item".to_owned(),
                },
                Item::Missing {
                    explanation: "missing item:\n  6".to_owned(),
                },
            ]),
        ),
        ("rec".to_owned(), ValueNode::Ellipsis),
        ("empty_array".to_owned(), ValueNode::array(vec![])),
        ("empty_object".to_owned(), ValueNode::object(vec![])),
    ]);
    assert_eq!(
        describe_node(&node, ""),
        [
            "{",
            "  f: [",
            "    \u{1b}[31m3\u{1b}[0m,",
            "    \u{1b}[36m// ^ expected to be 4\u{1b}[0m",
            "    \u{1b}[31m4\u{1b}[0m,",
            "    \u{1b}[36m// ^ unexpected item\u{1b}[0m",
            "    \u{1b}[31m// missing item:",
            "    //   6\u{1b}[0m",
            "  ],",
            "  rec: ...,",
            "  empty_array: [],",
            "  empty_object: {},",
            "}",
        ]
        .join("\n"),
    );
}

#[test]
fn quotes_non_identifier_properties() {
    assert_eq!(property_token("foo"), "foo");
    assert_eq!(property_token("foo bar"), "\"foo bar\"");
    assert_eq!(property_token("3"), "\"3\"");
}
