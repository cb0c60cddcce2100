//! Typed values and their type tags

use std::borrow::Cow;

use serde::Serialize;

/// Type tag of a value or of a whole field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Float,
    #[default]
    Text,
}

impl ValueKind {
    /// Widen the kind to accommodate another kind
    pub fn widen(self, other: ValueKind) -> ValueKind {
        match (self, other) {
            (a, b) if a == b => a,
            (ValueKind::Integer, ValueKind::Float) | (ValueKind::Float, ValueKind::Integer) => {
                ValueKind::Float
            }
            _ => ValueKind::Text,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// A single stored value
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// The kind this value was classified as
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render for delimited export.
    ///
    /// Finite floats always carry a decimal point so the value re-imports as a float.
    pub fn to_field(&self) -> Cow<'_, str> {
        match self {
            Value::Integer(i) => Cow::Owned(i.to_string()),
            Value::Float(f) => {
                let s = f.to_string();
                if f.is_finite() && !s.contains('.') {
                    Cow::Owned(format!("{s}.0"))
                } else {
                    Cow::Owned(s)
                }
            }
            Value::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Render for display with a fixed number of decimals for floats
    pub fn display(&self, precision: usize) -> Cow<'_, str> {
        match self {
            Value::Float(f) => Cow::Owned(format!("{f:.precision$}")),
            other => other.to_field(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_field())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
