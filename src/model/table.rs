//! Table, metadata and field access

use std::slice;

use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, TypePolicy};
use crate::error::{Result, StoreError};

use super::field::Field;
use super::value::Value;

/// Shape of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Metadata {
    /// Number of fields
    pub fields: usize,
    /// Number of rows
    pub items: usize,
}

/// An ordered set of fields that all hold the same number of rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Fields in header order, keyed by name
    pub(super) fields: IndexMap<String, Field, FxBuildHasher>,
    /// Row count shared by every field
    pub(super) items: usize,
    pub(super) delimiter: u8,
    pub(super) type_policy: TypePolicy,
}

impl Table {
    /// Create an empty table with the given field names, in order.
    ///
    /// Names are stored as given; the importer trims them beforehand. The
    /// delimiter in `config` must be ASCII so byte and character splitting agree.
    pub fn new<I, S>(names: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !config.delimiter.is_ascii() {
            return Err(StoreError::InvalidDelimiter {
                delimiter: config.delimiter,
            });
        }

        let mut fields = IndexMap::with_hasher(FxBuildHasher);
        for name in names {
            let name = name.into();
            match fields.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(StoreError::DuplicateField {
                        name: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    let field = Field::new(entry.key().clone());
                    entry.insert(field);
                }
            }
        }

        Ok(Self {
            fields,
            items: 0,
            delimiter: config.delimiter,
            type_policy: config.type_policy,
        })
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            fields: self.field_count(),
            items: self.items,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn row_count(&self) -> usize {
        self.items
    }

    /// Delimiter used when splitting rows passed to `add_row`
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Look up a field by exact name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Look up a field by position
    pub fn column(&self, index: usize) -> Option<&Field> {
        self.fields.get_index(index).map(|(_, field)| field)
    }

    /// Position of a field by name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    /// Fields in header order
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> {
        self.fields.values()
    }

    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Values of one row, in field order
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.items {
            return None;
        }
        self.fields.values().map(|f| f.get(index)).collect()
    }

    /// Iterate rows by advancing one cursor per field in lockstep
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            cursors: self.fields.values().map(|f| f.values().iter()).collect(),
            remaining: self.items,
        }
    }

    /// Whether every field holds exactly `row_count()` values
    pub fn is_aligned(&self) -> bool {
        self.fields.values().all(|f| f.len() == self.items)
    }

    /// Release the table and everything it owns
    pub fn clear(self) {
        debug!(
            fields = self.field_count(),
            rows = self.items,
            "clearing table"
        );
        drop(self);
    }
}

/// Lockstep row iterator returned by [`Table::rows`]
pub struct Rows<'a> {
    cursors: Vec<slice::Iter<'a, Value>>,
    remaining: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Vec<&'a Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.cursors.iter_mut().map(|cursor| cursor.next()).collect()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
