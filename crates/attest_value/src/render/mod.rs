//! Converts any value to an always-ok mismatch tree, and to canonical text.
//!
//! The tree never carries a mismatch and every collection item is `Present`;
//! this is how values without a matcher (extra items, matcher parameters)
//! get described. A set of in-process allocation addresses travels down the
//! recursion so a value that contains itself renders as `...` at the
//! back-edge instead of recursing forever. The set is local to one top-level
//! call: independent renders never interfere.

use std::fmt;

use attest_tree::text::quote;
use attest_tree::{describe_node, Item, ValueNode};
use rustc_hash::FxHashSet;

use crate::stack::ensure_sufficient_stack;
use crate::value::Value;


/// Hard cap on render recursion depth. Cycles are broken by the in-process
/// set, so only a genuinely deeper graph can reach this; exceeding it is a
/// fatal error rather than silent stack exhaustion.
pub const MAX_DEPTH: usize = 1000;

/// Converts `value` to a `ValueNode` with no mismatches.
pub fn value_to_node(value: &Value) -> ValueNode {
    to_node(value, &mut InProcess::default())
}

/// Canonical textual rendering of `value`.
pub fn describe_value(value: &Value) -> String {
    describe_node(&value_to_node(value), "")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_value(self))
    }
}

#[derive(Default)]
struct InProcess {
    addrs: FxHashSet<usize>,
    depth: usize,
}

/// Removes the current value from the in-process set on every exit path,
/// unwinding included.
struct Frame<'a> {
    ip: &'a mut InProcess,
    addr: Option<usize>,
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.ip.depth -= 1;
        if let Some(addr) = self.addr {
            self.ip.addrs.remove(&addr);
        }
    }
}

fn to_node(value: &Value, ip: &mut InProcess) -> ValueNode {
    let addr = value.container_addr();
    if let Some(addr) = addr {
        if ip.addrs.contains(&addr) {
            // The value references itself. Avoid infinite recursion.
            return ValueNode::Ellipsis;
        }
        ip.addrs.insert(addr);
    }
    ip.depth += 1;
    let mut frame = Frame { ip, addr };
    if frame.ip.depth > MAX_DEPTH {
        panic!("value graph exceeds the maximum render depth of {MAX_DEPTH}");
    }
    ensure_sufficient_stack(|| node_for(value, frame.ip))
}

fn node_for(value: &Value, ip: &mut InProcess) -> ValueNode {
    match value {
        Value::None => ValueNode::simple("None"),
        Value::Bool(b) => ValueNode::simple(b.to_string()),
        Value::Int(n) => ValueNode::simple(n.to_string()),
        Value::Float(n) => ValueNode::simple(float_text(*n)),
        Value::Str(s) => ValueNode::simple(string_text(s)),
        Value::Date(millis) => ValueNode::simple(date_text(*millis)),
        Value::Pattern(regex) => ValueNode::simple(pattern_text(regex.as_str())),
        Value::List(items) => items_node(items.snapshot(), ip),
        Value::Set(elements) => {
            let contents = items_node(elements.snapshot(), ip);
            ValueNode::simple(format!("set({})", describe_node(&contents, "")))
        }
        Value::Map(entries) => {
            let mut items = Vec::new();
            for (key, entry_value) in entries.snapshot() {
                items.push(Item::Present {
                    node: items_node(vec![key, entry_value], ip),
                });
            }
            let contents = ValueNode::array(items);
            ValueNode::simple(format!("map({})", describe_node(&contents, "")))
        }
        Value::Record(fields) => {
            let mut record = Vec::new();
            for (name, field_value) in fields.snapshot() {
                record.push((name, to_node(&field_value, ip)));
            }
            ValueNode::object(record)
        }
        Value::Opaque { display, .. } => ValueNode::simple(display.as_ref()),
    }
}

fn items_node(items: Vec<Value>, ip: &mut InProcess) -> ValueNode {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(Item::Present {
            node: to_node(&item, ip),
        });
    }
    ValueNode::array(out)
}

fn float_text(n: f64) -> String {
    if n.is_nan() {
        "f64::NAN".to_owned()
    } else if n == f64::INFINITY {
        "f64::INFINITY".to_owned()
    } else if n == f64::NEG_INFINITY {
        "f64::NEG_INFINITY".to_owned()
    } else {
        format!("{n:?}")
    }
}

fn string_text(s: &str) -> String {
    if !s.contains('\n') {
        return quote(s);
    }
    // Quote each line separately so multi-line strings stay diffable.
    let mut contents = String::new();
    for line in s.split('\n') {
        contents.push_str("  ");
        contents.push_str(&quote(line));
        contents.push_str(",\n");
    }
    format!("[\n{contents}].join(\"\\n\")")
}

fn date_text(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(instant) => format!(
            "date({})",
            quote(&instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        ),
        // Outside the printable range; keep the raw constructor form.
        None => format!("date_ms({millis})"),
    }
}

fn pattern_text(source: &str) -> String {
    if source.contains('/') || source.contains('\n') {
        format!("regex({})", quote(source))
    } else {
        format!("/{source}/")
    }
}
