use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use zbus::zvariant::{OwnedValue, Value};

/// A property value received from the bus.
///
/// D-Bus variants are converted into this shape as soon as they arrive so the
/// rest of the crate never touches `zvariant` directly. Integer widths are
/// collapsed into `Int`; object paths and signatures become `Str`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Text, object path or signature
    Str(String),
    /// Any integer that fits in an `i64`
    Int(i64),
    /// Floating point number
    Double(f64),
    /// Boolean flag
    Bool(bool),
    /// Array of values
    List(Vec<PropValue>),
    /// Dictionary keyed by string
    Map(BTreeMap<String, PropValue>),
}

impl PropValue {
    /// Converts a bus value, or `None` when its shape has no counterpart.
    pub fn from_value(value: &Value<'_>) -> Option<Self> {
        match value {
            Value::Str(s) => Some(Self::Str(s.to_string())),
            Value::ObjectPath(path) => Some(Self::Str(path.to_string())),
            Value::Signature(signature) => Some(Self::Str(signature.to_string())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::U8(n) => Some(Self::Int(i64::from(*n))),
            Value::I16(n) => Some(Self::Int(i64::from(*n))),
            Value::U16(n) => Some(Self::Int(i64::from(*n))),
            Value::I32(n) => Some(Self::Int(i64::from(*n))),
            Value::U32(n) => Some(Self::Int(i64::from(*n))),
            Value::I64(n) => Some(Self::Int(*n)),
            Value::U64(n) => i64::try_from(*n).ok().map(Self::Int),
            Value::F64(f) => Some(Self::Double(*f)),
            Value::Value(inner) => Self::from_value(inner),
            Value::Array(array) => array
                .iter()
                .map(Self::from_value)
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            Value::Dict(_) => {
                let owned = value.try_to_owned().ok()?;
                let entries = HashMap::<String, OwnedValue>::try_from(owned).ok()?;
                Self::from_entries(&entries).map(Self::Map)
            }
            _ => None,
        }
    }

    /// Converts a string-keyed dictionary, failing if any value fails.
    pub fn from_entries(
        entries: &HashMap<String, OwnedValue>,
    ) -> Option<BTreeMap<String, PropValue>> {
        entries
            .iter()
            .map(|(key, value)| Self::from_value(value).map(|value| (key.clone(), value)))
            .collect()
    }

    /// Converts back into a bus value. Only scalars can be written.
    pub fn to_value(&self) -> Option<Value<'static>> {
        match self {
            PropValue::Str(s) => Some(Value::from(s.clone())),
            PropValue::Int(n) => Some(Value::from(*n)),
            PropValue::Double(f) => Some(Value::from(*f)),
            PropValue::Bool(b) => Some(Value::from(*b)),
            PropValue::List(_) | PropValue::Map(_) => None,
        }
    }

    /// The flag value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) => f.write_str(s),
            PropValue::Int(n) => write!(f, "{n}"),
            PropValue::Double(d) => write!(f, "{d}"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            PropValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Int(n)
    }
}

impl From<f64> for PropValue {
    fn from(f: f64) -> Self {
        PropValue::Double(f)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}
