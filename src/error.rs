//! Error types for table import, mutation and export

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the store.
///
/// Malformed records are not represented here: they are skipped on import and
/// rejected by [`Table::add_row`](crate::model::Table::add_row) without an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The import source could not be opened for reading
    #[error("cannot open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The underlying reader failed while producing records
    #[error("failed to read record: {source}")]
    Read {
        #[from]
        source: csv::Error,
    },

    /// The header names the same field twice
    #[error("duplicate field name in header: {name:?}")]
    DuplicateField { name: String },

    /// The configured delimiter is not a single ASCII byte
    #[error("delimiter must be ASCII, got byte 0x{delimiter:02x}")]
    InvalidDelimiter { delimiter: u8 },

    /// Row removal requested past the end of the table
    #[error("row {index} out of range (table has {items} rows)")]
    RowOutOfRange { index: usize, items: usize },

    /// Growing a field's value storage failed
    #[error("failed to allocate value storage: {0}")]
    Allocation(#[from] TryReserveError),

    /// Writing to an export or display sink failed
    #[error("failed to write output: {source}")]
    Write {
        #[from]
        source: io::Error,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StoreError>;
