//! Dynamic values the interpreter encodes.

use std::time::Duration;

/// Self-contained input value.
///
/// `Struct` and `Map` keep their pairs in the order given; the interpreter
/// decides the output order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An absent optional value.
    Null,
    Bool(bool),
    Int(i128),
    Str(Vec<u8>),
    Duration(Duration),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Fields by declared name.
    Struct(Vec<(String, Value)>),
    /// Bytes a native encoder would write, emitted verbatim.
    Native(Vec<u8>),
}

impl Value {
    pub fn str(s: impl AsRef<[u8]>) -> Self {
        Value::Str(s.as_ref().to_vec())
    }

    pub fn int(n: impl Into<i128>) -> Self {
        Value::Int(n.into())
    }

    pub fn secs(secs: u64) -> Self {
        Value::Duration(Duration::from_secs(secs))
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn map<K: AsRef<[u8]>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (Value::str(k), v)).collect())
    }

    pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Value::Struct(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    /// Kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Duration(_) => "duration",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
            Value::Native(_) => "native",
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }
}
