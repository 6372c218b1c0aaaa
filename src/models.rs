// src/models.rs

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

// --- PARAMETER DECLARATION MODELS ---

/// The type of a declared parameter. Fixed at declaration time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// A signed 64-bit integer.
    Integer,
    /// Free text, optionally quoted on the command line.
    String,
    /// A flag: `--name`, `--name=0|1` or `--noname`.
    Boolean,
}

impl ParameterKind {
    /// The value a parameter of this kind takes when the caller gives no default.
    pub fn zero_value(self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::String => Value::String(String::new()),
            Self::Boolean => Value::Boolean(false),
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
        };
        f.write_str(label)
    }
}

/// A concrete value, either a declared default or one extracted from the arguments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Value {
    /// An integer binding.
    Integer(i64),
    /// A string binding.
    String(String),
    /// A boolean binding.
    Boolean(bool),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Integer(_) => ParameterKind::Integer,
            Self::String(_) => ParameterKind::String,
            Self::Boolean(_) => ParameterKind::Boolean,
        }
    }

    /// Returns the integer if this is an `Integer` value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag if this is a `Boolean` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Declaratively describes one parameter the engine knows how to extract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Matched on the command line as `--name`.
    pub name: String,
    /// Free text, only used by the help table.
    pub description: String,
    /// Decides which value grammar applies.
    pub kind: ParameterKind,
    /// Always of the same kind as `kind`.
    pub default: Value,
}

// --- BINDING MODELS ---

/// The result of a parse pass: every declared parameter mapped to its value.
///
/// Entries keep declaration order, so iteration, the debug dump and the JSON
/// output are all deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl BindingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding but keeping its position.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self
            .index
            .get(name)
            .and_then(|&pos| self.entries.get_mut(pos))
        {
            slot.1 = value;
            return;
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), value));
    }

    /// Looks up the binding for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index
            .get(name)
            .and_then(|&pos| self.entries.get(pos))
            .map(|(_, value)| value)
    }

    /// Typed lookup for integer parameters.
    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_integer)
    }

    /// Typed lookup for string parameters.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Typed lookup for boolean parameters.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a map so JSON output reads `{"name": value, ...}` in declaration order.
impl Serialize for BindingTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_match_kind() {
        assert_eq!(ParameterKind::Integer.zero_value(), Value::Integer(0));
        assert_eq!(ParameterKind::String.zero_value(), Value::String(String::new()));
        assert_eq!(ParameterKind::Boolean.zero_value(), Value::Boolean(false));
        for kind in [
            ParameterKind::Integer,
            ParameterKind::String,
            ParameterKind::Boolean,
        ] {
            assert_eq!(kind.zero_value().kind(), kind);
        }
    }

    #[test]
    fn test_binding_table_set_keeps_position() {
        let mut table = BindingTable::new();
        table.set("a", Value::Integer(1));
        table.set("b", Value::Boolean(false));
        table.set("a", Value::Integer(7));

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(table.get_integer("a"), Some(7));
        assert_eq!(table.get_bool("b"), Some(false));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_typed_lookup_rejects_wrong_kind() {
        let mut table = BindingTable::new();
        table.set("name", Value::from("x"));
        assert_eq!(table.get_str("name"), Some("x"));
        assert_eq!(table.get_integer("name"), None);
        assert_eq!(table.get_bool("missing"), None);
    }

    #[test]
    fn test_binding_table_serializes_in_order() {
        let mut table = BindingTable::new();
        table.set("zeta", Value::Integer(-3));
        table.set("alpha", Value::from("a b"));
        table.set("flag", Value::Boolean(true));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zeta":-3,"alpha":"a b","flag":true}"#);
    }
}
