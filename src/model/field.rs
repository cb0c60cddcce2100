//! Per-field value storage and type tag

use std::collections::TryReserveError;

use serde::Serialize;

use crate::config::TypePolicy;

use super::value::{Value, ValueKind};

/// A named column: its reported type tag and its values in row order.
///
/// Each value keeps its own classification; `kind` is the tag reported for the
/// field as a whole and is maintained according to the table's [`TypePolicy`].
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    name: String,
    kind: ValueKind,
    #[serde(skip)]
    values: Vec<Value>,
}

impl Field {
    /// Create an empty Text field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ValueKind::default(),
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reported type tag
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Values in row order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a row position
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Make room for `additional` values without pushing any
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.values.try_reserve(additional)
    }

    /// Append a value and update the reported tag
    pub(crate) fn push(&mut self, value: Value, policy: TypePolicy) {
        let kind = value.kind();
        self.kind = match policy {
            TypePolicy::LastToken => kind,
            TypePolicy::Widen if self.values.is_empty() => kind,
            TypePolicy::Widen => self.kind.widen(kind),
        };
        self.values.push(value);
    }

    /// Unlink the value at `row`. The caller has already checked the bound.
    pub(crate) fn remove(&mut self, row: usize) -> Value {
        self.values.remove(row)
    }
}
