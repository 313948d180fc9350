//! Loosely-typed source documents as returned by the document store.
//!
//! The store's collections carry no schema: the same field can appear
//! under several names, numbers sometimes arrive as strings, and nested
//! lists may be missing. [`RawDocument`] keeps the document as a JSON
//! object and offers alias-aware accessors that the normalizer builds on.
//!
//! # Presence
//!
//! A value is *present* when it would be truthy in the store's native
//! tooling: `null`, `false`, `0` and `""` are absent; every list and
//! object (even empty) is present. Alias lookups walk their key list and
//! stop at the first present value of a usable type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;

/// A schemaless source document: a JSON object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument(Map<String, Value>);

impl RawDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value if it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Returns the raw value stored under `key`, present or not.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value under `key` only if it is present.
    #[must_use]
    pub fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_present(v))
    }

    /// Returns `true` if the document has an entry under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the top-level field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// First present alias rendered as text. Strings are taken as-is and
    /// numbers are formatted; other types are skipped.
    #[must_use]
    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        aliases
            .iter()
            .filter_map(|key| self.present(key))
            .find_map(value_as_text)
    }

    /// First present alias interpreted as a finite, positive amount.
    /// Numeric strings such as `"450"` are accepted.
    #[must_use]
    pub fn amount(&self, aliases: &[&str]) -> Option<f64> {
        aliases
            .iter()
            .filter_map(|key| self.present(key))
            .find_map(value_as_amount)
    }

    /// First alias holding a list. An empty list wins over later aliases.
    #[must_use]
    pub fn list(&self, aliases: &[&str]) -> Option<&[Value]> {
        aliases
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(|v| v.as_array().map(Vec::as_slice))
    }

    /// First alias holding a list of strings, or a single string which is
    /// wrapped into a one-element list. Non-text elements are dropped.
    #[must_use]
    pub fn strings(&self, aliases: &[&str]) -> Option<Vec<String>> {
        aliases.iter().find_map(|key| match self.0.get(*key)? {
            Value::Array(items) => Some(items.iter().filter_map(value_as_text).collect()),
            Value::String(s) if !s.is_empty() => Some(vec![s.clone()]),
            _ => None,
        })
    }

    /// Returns the nested object under `key` as its own document.
    #[must_use]
    pub fn nested(&self, key: &str) -> Option<Self> {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .map(|map| Self(map.clone()))
    }

    /// Returns the boolean under `key`; absent for any other type.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Store identifier: `_id` first, then `id`.
    ///
    /// Accepts plain strings, numbers, and extended-JSON object ids of
    /// the form `{"$oid": "..."}`.
    #[must_use]
    pub fn identifier(&self) -> Option<RecordId> {
        ["_id", "id"]
            .iter()
            .filter_map(|key| self.present(key))
            .find_map(|value| match value {
                Value::String(s) => Some(RecordId::new(s.clone())),
                Value::Number(n) => Some(RecordId::new(n.to_string())),
                Value::Object(map) => map
                    .get("$oid")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(RecordId::from),
                _ => None,
            })
    }

    /// Returns `true` if either identifier field equals `id`.
    #[must_use]
    pub fn has_identifier(&self, id: &RecordId) -> bool {
        self.identifier().is_some_and(|own| own == *id)
    }

    /// Sets `key` to `value`. `null` values are not stored.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if !value.is_null() {
            self.0.insert(key.to_string(), value);
        }
    }

    /// Sets `key` when `value` is `Some`.
    pub fn insert_opt<T: Into<Value>>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Overwrites this document's fields with every field of `patch`.
    ///
    /// Fields missing from `patch` are left untouched.
    pub fn merge(&mut self, patch: Self) {
        for (key, value) in patch.0 {
            self.0.insert(key, value);
        }
    }

    /// Consumes the document, returning its JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RawDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Truthiness of a source value.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_as_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (amount.is_finite() && amount > 0.0).then_some(amount)
}
