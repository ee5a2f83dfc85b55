//! Flat record model shared by every entity collection
//!
//! A record is an ordered map from field name to a primitive [`Value`].
//! Field order is insertion order and is what CSV export uses as its
//! column order.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Primitive field value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    /// Integer view of the value; integral floats are accepted
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Empty text is treated as "no value" by filters and forms
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Case-insensitive substring match against the display form.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn contains_ci(&self, needle_lower: &str) -> bool {
        match self {
            Value::Text(s) => s.to_lowercase().contains(needle_lower),
            other => other.to_string().contains(needle_lower),
        }
    }

    /// Ordering used by the sort stage.
    ///
    /// Numbers compare numerically, text compares case-insensitively and
    /// numbers order before text.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Value::Text(_), _) => Ordering::Greater,
            (_, Value::Text(_)) => Ordering::Less,
            (a, b) => {
                let a = a.as_f64().unwrap_or_default();
                let b = b.as_f64().unwrap_or_default();
                a.total_cmp(&b)
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Text(_), _) | (_, Value::Text(_)) => false,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Identity of a record within its collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Numeric id (`max + 1` allocation)
    Numeric(i64),
    /// Formatted key such as `ORD-012`
    Key(String),
}

impl Identity {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(Identity::Key(s.clone())),
            other => other.as_i64().map(Identity::Numeric),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Identity::Numeric(n) => Value::Int(*n),
            Identity::Key(k) => Value::Text(k.clone()),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Numeric(n) => write!(f, "{}", n),
            Identity::Key(k) => f.write_str(k),
        }
    }
}

impl From<i64> for Identity {
    fn from(v: i64) -> Self {
        Identity::Numeric(v)
    }
}

impl From<&str> for Identity {
    fn from(v: &str) -> Self {
        Identity::Key(v.to_string())
    }
}

/// One entity instance as an ordered field map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field, keeping its position if it already exists
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Identity read from `field`
    pub fn identity(&self, field: &str) -> Option<Identity> {
        self.get(field).and_then(Identity::from_value)
    }

    /// Whether any field contains `needle_lower` (already lowercased)
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.fields.values().any(|v| v.contains_ci(needle_lower))
    }

    /// Display string for a field, empty when absent
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

/// Build a [`Record`] from `field => value` pairs
#[macro_export]
macro_rules! record {
    ($($field:expr => $value:expr),* $(,)?) => {{
        let record = $crate::record::Record::new();
        $(let record = record.with($field, $value);)*
        record
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_equality_crosses_int_and_float() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(1), Value::Text("1".into()));
        assert_ne!(Value::Text("Active".into()), Value::Text("active".into()));
    }

    #[test]
    fn test_sort_cmp_text_is_case_insensitive() {
        let a = Value::from("apple");
        let b = Value::from("Banana");
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
        assert_eq!(Value::from("ABC").sort_cmp(&Value::from("abc")), Ordering::Equal);
    }

    #[test]
    fn test_sort_cmp_numbers_before_text() {
        assert_eq!(Value::Int(999).sort_cmp(&Value::from("1")), Ordering::Less);
        assert_eq!(Value::Float(2.5).sort_cmp(&Value::Int(3)), Ordering::Less);
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut r = record! { "id" => 1, "name" => "A", "price" => 100 };
        r.set("name", "B");
        let names: Vec<_> = r.field_names().collect();
        assert_eq!(names, vec!["id", "name", "price"]);
        assert_eq!(r.display("name"), "B");
    }

    #[test]
    fn test_search_matches_numbers_and_text() {
        let r = record! { "id" => 42, "user" => "Taro Yamada" };
        assert!(r.matches_search("yamada"));
        assert!(r.matches_search("42"));
        assert!(!r.matches_search("hanako"));
    }

    #[test]
    fn test_identity_from_value() {
        assert_eq!(Identity::from_value(&Value::Int(3)), Some(Identity::Numeric(3)));
        assert_eq!(
            Identity::from_value(&Value::from("ORD-001")),
            Some(Identity::Key("ORD-001".into()))
        );
        assert_eq!(Identity::from_value(&Value::Float(1.5)), None);
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let r: Record = serde_json::from_str(r#"{"id":1,"name":"A","score":4.5}"#).unwrap();
        assert_eq!(r.get("id"), Some(&Value::Int(1)));
        assert!(matches!(r.get("score"), Some(Value::Float(_))));
        assert_eq!(r.get("name").and_then(Value::as_text), Some("A"));
    }
}
