//! JSON output format

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::model::{Field, Metadata, Table, Value};

use super::OutputFormatter;

/// JSON document with metadata, field descriptions and row arrays
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    metadata: Metadata,
    fields: Vec<&'a Field>,
    rows: Vec<Vec<&'a Value>>,
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let doc = JsonTable {
            metadata: table.metadata(),
            fields: table.fields().collect(),
            rows: table.rows().collect(),
        };

        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &doc)
        } else {
            serde_json::to_writer(&mut *writer, &doc)
        };
        written.map_err(io::Error::from)?;
        writeln!(writer)?;
        Ok(())
    }
}
