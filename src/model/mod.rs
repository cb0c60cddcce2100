//! Data model for the in-memory columnar table

mod field;
mod mutate;
mod table;
mod value;

pub use field::Field;
pub use table::{Metadata, Rows, Table};
pub use value::{Value, ValueKind};
