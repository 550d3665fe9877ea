//! Runtime values inspected by assertions.
//!
//! Scalars are stored inline; collections go through [`Heap`] so that they
//! carry instance identity ("same value" for a collection means the same
//! allocation, never deep equality) and can be mutated into self-referential
//! graphs. All collection values are created through factory methods on
//! `Value`; the `Heap` constructor is not public.

mod heap;

use std::sync::Arc;

use regex::Regex;

pub use heap::Heap;


/// A dynamically typed value.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absent value: what a record reports for a field it does not have.
    None,
    Bool(bool),
    /// Integer kind, distinct from `Float` (an integer never equals a float).
    Int(i128),
    /// IEEE-754 double kind.
    Float(f64),
    Str(Arc<str>),
    /// An instant, as epoch milliseconds UTC.
    Date(i64),
    /// A compiled regular expression. Identity is pointer identity: two
    /// equal-looking patterns are still distinct instances.
    Pattern(Arc<Regex>),
    /// Ordered sequence.
    List(Heap<Vec<Value>>),
    /// Insertion-ordered set; elements are distinct under same-value-zero.
    Set(Heap<Vec<Value>>),
    /// Insertion-ordered map; keys are distinct under same-value-zero.
    /// Inserting an existing key replaces the value, keeping the position.
    Map(Heap<Vec<(Value, Value)>>),
    /// Plain composite value with named fields, in insertion order.
    Record(Heap<Vec<(String, Value)>>),
    /// A foreign value represented as a leaf: rendered via `display`
    /// verbatim, reported as `type_name` in wrong-type diagnostics.
    Opaque {
        type_name: Arc<str>,
        display: Arc<str>,
    },
}

impl Value {
    pub fn int(n: impl Into<i128>) -> Self {
        Value::Int(n.into())
    }

    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// An instant from epoch milliseconds UTC.
    pub fn date_ms(millis: i64) -> Self {
        Value::Date(millis)
    }

    /// An instant parsed from an RFC 3339 timestamp, or `None` when the
    /// text does not parse.
    pub fn date_rfc3339(text: &str) -> Option<Self> {
        let parsed = chrono::DateTime::parse_from_rfc3339(text).ok()?;
        Some(Value::Date(parsed.timestamp_millis()))
    }

    pub fn pattern(regex: Regex) -> Self {
        Value::Pattern(Arc::new(regex))
    }

    /// Compile `source` into a pattern value.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Ok(Self::pattern(Regex::new(source)?))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// A set from the given elements, in order, dropping duplicates
    /// (same-value-zero) past their first occurrence.
    pub fn set(elements: Vec<Value>) -> Self {
        let value = Value::Set(Heap::new(Vec::with_capacity(elements.len())));
        for element in elements {
            value.add(element);
        }
        value
    }

    /// A map from the given entries, in order. A repeated key keeps its
    /// first position but takes the last value.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        let value = Value::Map(Heap::new(Vec::with_capacity(entries.len())));
        for (key, entry_value) in entries {
            value.insert(key, entry_value);
        }
        value
    }

    /// A record from the given fields, in order. A repeated field name keeps
    /// its first position but takes the last value.
    pub fn record<S: Into<String>>(fields: Vec<(S, Value)>) -> Self {
        let value = Value::Record(Heap::new(Vec::with_capacity(fields.len())));
        for (name, field_value) in fields {
            value.set_field(&name.into(), field_value);
        }
        value
    }

    pub fn opaque(type_name: impl Into<Arc<str>>, display: impl Into<Arc<str>>) -> Self {
        Value::Opaque {
            type_name: type_name.into(),
            display: display.into(),
        }
    }

    /// Append an item to a list.
    ///
    /// # Panics
    ///
    /// Panics when `self` is not a list.
    pub fn push(&self, item: Value) {
        match self {
            Value::List(items) => items.write().push(item),
            other => panic!("push() requires an array value, got {}", other.kind_name()),
        }
    }

    /// Add an element to a set; a same-value-zero duplicate is ignored.
    ///
    /// # Panics
    ///
    /// Panics when `self` is not a set.
    pub fn add(&self, element: Value) {
        match self {
            Value::Set(elements) => {
                let mut elements = elements.write();
                if !elements.iter().any(|e| e.same_value_zero(&element)) {
                    elements.push(element);
                }
            }
            other => panic!("add() requires a set value, got {}", other.kind_name()),
        }
    }

    /// Insert an entry into a map. An existing key (same-value-zero) keeps
    /// its position and takes the new value.
    ///
    /// # Panics
    ///
    /// Panics when `self` is not a map.
    pub fn insert(&self, key: Value, value: Value) {
        match self {
            Value::Map(entries) => {
                let mut entries = entries.write();
                match entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                    Some(entry) => entry.1 = value,
                    None => entries.push((key, value)),
                }
            }
            other => panic!("insert() requires a map value, got {}", other.kind_name()),
        }
    }

    /// Set a record field. An existing name keeps its position and takes the
    /// new value.
    ///
    /// # Panics
    ///
    /// Panics when `self` is not a record.
    pub fn set_field(&self, name: &str, value: Value) {
        match self {
            Value::Record(fields) => {
                let mut fields = fields.write();
                match fields.iter_mut().find(|(n, _)| n == name) {
                    Some(field) => field.1 = value,
                    None => fields.push((name.to_owned(), value)),
                }
            }
            other => panic!(
                "set_field() requires an object value, got {}",
                other.kind_name()
            ),
        }
    }

    /// Value of a record field, or `None` if `self` is not a record or has
    /// no such field.
    pub fn get_field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Record(fields) => fields
                .read()
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// The runtime kind, as it appears in wrong-type diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::Pattern(_) => "pattern",
            Value::List(_) => "array",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Record(_) => "object",
            Value::Opaque { type_name, .. } => type_name,
        }
    }

    /// True for the kinds that carry instance identity.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Value::List(_) | Value::Set(_) | Value::Map(_) | Value::Record(_)
        )
    }

    /// Numeric contents as `f64`, for either numeric kind.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// "Same value" equality: `NaN` equals `NaN`, `+0.0` and `-0.0` are
    /// distinct, strings compare by content, collections and patterns by
    /// instance identity, and an integer never equals a float.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            }
            _ => self.same_value_zero(other),
        }
    }

    /// Like [`same_value`], except `+0.0` equals `-0.0`. This is the
    /// equality used for set membership and map keys.
    ///
    /// [`same_value`]: Value::same_value
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                #[allow(clippy::float_cmp)]
                {
                    a == b || (a.is_nan() && b.is_nan())
                }
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => Arc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) | (Value::Set(a), Value::Set(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Heap::ptr_eq(a, b),
            (
                Value::Opaque {
                    type_name: a_type,
                    display: a_display,
                },
                Value::Opaque {
                    type_name: b_type,
                    display: b_display,
                },
            ) => a_type == b_type && a_display == b_display,
            _ => false,
        }
    }

    /// Cycle-detection key: the allocation address for collection values.
    pub(crate) fn container_addr(&self) -> Option<usize> {
        match self {
            Value::List(heap) | Value::Set(heap) => Some(heap.addr()),
            Value::Map(heap) => Some(heap.addr()),
            Value::Record(heap) => Some(heap.addr()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n.into())
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Value::pattern(regex)
    }
}
