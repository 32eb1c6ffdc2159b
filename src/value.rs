use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt::{self, Display};

/// Key/value pairs of an object, kept in document order.
///
/// Equality between maps ignores order.
pub type Map = IndexMap<String, Value>;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Object(Map),
    Array(Vec<Value>),
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// The JSON type of a value, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl ValueKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many values of each kind a tree contains, the root included.
/// Object keys are not counted as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementCounts {
    pub objects: usize,
    pub arrays: usize,
    pub strings: usize,
    pub numbers: usize,
    pub booleans: usize,
    pub nulls: usize,
}

impl ElementCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.objects + self.arrays + self.strings + self.numbers + self.booleans + self.nulls
    }
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Looks up `key` when this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    #[must_use]
    pub fn count_elements(&self) -> ElementCounts {
        let mut counts = ElementCounts::default();
        let mut pending = vec![self];
        // explicit stack: counting must not recurse as deep as the document
        while let Some(value) = pending.pop() {
            match value {
                Value::Object(map) => {
                    counts.objects += 1;
                    pending.extend(map.values());
                }
                Value::Array(items) => {
                    counts.arrays += 1;
                    pending.extend(items.iter());
                }
                Value::String(_) => counts.strings += 1,
                Value::Number(_) => counts.numbers += 1,
                Value::Boolean(_) => counts.booleans += 1,
                Value::Null => counts.nulls += 1,
            }
        }
        counts
    }

    /// Encodes the value as compact JSON text.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&JsonText(self))
    }

    /// Encodes the value as pretty-printed JSON text.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonText(self))
    }

    /// Encodes the value as YAML.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Serializes a value as JSON text that parses back to the same tree.
///
/// serde_json writes infinite floats as `null`. Numbers that overflowed while
/// parsing are written as an overflowing literal instead, so they read back as
/// infinity. Only meaningful for serde_json serializers.
pub(crate) struct JsonText<'a>(pub(crate) &'a Value);

impl Serialize for JsonText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Number(n) if n.is_infinite() => {
                let literal = if n.is_sign_negative() { "-1e999" } else { "1e999" };
                RawValue::from_string(literal.to_string())
                    .map_err(S::Error::custom)?
                    .serialize(serializer)
            }
            Value::Array(items) => serializer.collect_seq(items.iter().map(JsonText)),
            Value::Object(map) => {
                serializer.collect_map(map.iter().map(|(key, value)| (key, JsonText(value))))
            }
            other => other.serialize(serializer),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}
