//! csvstore - In-memory typed columnar store for delimited text
//!
//! Imports a delimited file into per-field typed columns, supports appending and
//! removing rows while keeping every column the same length, and writes the table
//! back out as delimited text, a bordered grid or JSON.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod text;

pub use config::Config;
pub use error::{Result, StoreError};
pub use model::{Field, Metadata, Table, Value, ValueKind};
pub use output::{export, show};
pub use parser::import;
