use attest_value::Value;
use regex::Regex;

use crate::Matcher;

/// Anything that can stand on the expected side of an assertion: an explicit
/// matcher, a plain value, or a nested specification mixing both.
#[derive(Clone, Debug)]
pub enum Expected {
    Matcher(Matcher),
    Value(Value),
    /// Positional list specification; coerces to an array matcher.
    Items(Vec<Expected>),
    /// Partial record specification; coerces to an object matcher.
    Fields(Vec<(String, Expected)>),
    /// Map specification; coerces to a map matcher.
    Entries(Vec<(Value, Expected)>),
}

impl Expected {
    pub fn items(items: Vec<Expected>) -> Self {
        Expected::Items(items)
    }

    pub fn fields<S: Into<String>>(fields: Vec<(S, Expected)>) -> Self {
        Expected::Fields(
            fields
                .into_iter()
                .map(|(name, expected)| (name.into(), expected))
                .collect(),
        )
    }

    pub fn entries(entries: Vec<(Value, Expected)>) -> Self {
        Expected::Entries(entries)
    }
}

impl From<Matcher> for Expected {
    fn from(matcher: Matcher) -> Self {
        Expected::Matcher(matcher)
    }
}

impl From<Value> for Expected {
    fn from(value: Value) -> Self {
        Expected::Value(value)
    }
}

impl From<Vec<Expected>> for Expected {
    fn from(items: Vec<Expected>) -> Self {
        Expected::Items(items)
    }
}

macro_rules! expected_from_value {
    ($($source:ty),* $(,)?) => {
        $(impl From<$source> for Expected {
            fn from(value: $source) -> Self {
                Expected::Value(Value::from(value))
            }
        })*
    };
}

expected_from_value!(bool, i32, i64, i128, f64, &str, String, Regex);

/// Resolves a specification into the matcher that enforces it.
///
/// Plain values coerce by kind: lists to positional array matchers, sets to
/// membership matchers, maps to map matchers, dates and patterns to their
/// matchers, records to partial object matchers, and every other value to an
/// identity matcher. The order matters only in that each kind is claimed by
/// exactly one matcher; a matcher anywhere in the specification is passed
/// through untouched.
pub fn to_matcher(input: impl Into<Expected>) -> Matcher {
    match input.into() {
        Expected::Matcher(matcher) => matcher,
        Expected::Items(items) => Matcher::Array {
            items: items.into_iter().map(to_matcher).collect(),
        },
        Expected::Fields(fields) => Matcher::Object {
            fields: fields
                .into_iter()
                .map(|(name, expected)| (name, to_matcher(expected)))
                .collect(),
        },
        Expected::Entries(entries) => Matcher::Map {
            entries: entries
                .into_iter()
                .map(|(key, expected)| (key, to_matcher(expected)))
                .collect(),
        },
        Expected::Value(value) => value_to_matcher(value),
    }
}

fn value_to_matcher(value: Value) -> Matcher {
    match value {
        Value::List(items) => Matcher::Array {
            items: items.snapshot().into_iter().map(value_to_matcher).collect(),
        },
        Value::Set(elements) => Matcher::Set {
            elements: elements.snapshot(),
        },
        Value::Map(entries) => Matcher::Map {
            entries: entries
                .snapshot()
                .into_iter()
                .map(|(key, value)| (key, value_to_matcher(value)))
                .collect(),
        },
        Value::Date(expected_ms) => Matcher::Date { expected_ms },
        Value::Pattern(expected) => Matcher::Pattern { expected },
        Value::Record(fields) => Matcher::Object {
            fields: fields
                .snapshot()
                .into_iter()
                .map(|(name, value)| (name, value_to_matcher(value)))
                .collect(),
        },
        other => Matcher::Is { expected: other },
    }
}
